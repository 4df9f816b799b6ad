//! Access token service

mod service;

pub use service::{AccessClaims, IssuedToken, TokenService};
