//! Simulation history service

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::HistoryService;
pub use types::{HistoryItem, HistoryStats, HistorySummary};
