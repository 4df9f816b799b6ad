//! Repository interfaces for data persistence
//!
//! Each repository is a trait in this crate with a MySQL implementation in
//! the infra crate and an in-memory mock used by service tests.

pub mod history;
pub mod member;
pub mod quote;

pub use history::{HistoryFilter, HistoryRepository, HistoryStatsRow, HistorySummaryRow};
pub use member::MemberRepository;
pub use quote::QuoteRepository;
