//! Simulation history persistence interface

pub mod mock;
mod r#trait;

pub use mock::MockHistoryRepository;
pub use r#trait::{
    HistoryFilter, HistoryRepository, HistorySort, HistorySortKey, HistoryStatsRow,
    HistorySummaryRow,
};
