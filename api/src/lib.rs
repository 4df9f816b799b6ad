//! HTTP layer for the GoldSim backend
//!
//! Route handlers, DTOs and the app factory live here; business logic stays
//! in `gs_core` and I/O implementations in `gs_infra`.

pub mod app;
pub mod auth;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
