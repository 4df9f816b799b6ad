//! Simulation history repository trait and query types.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::simulation_history::SimulationHistory;
use crate::errors::DomainError;

/// Row-selection criteria shared by the list, count and stats queries
#[derive(Debug, Clone)]
pub struct HistoryFilter {
    pub member_no: i64,
    pub from: NaiveDate,
    pub to: NaiveDate,

    /// Optional instrument/category filter; `None` matches every type
    pub history_type: Option<String>,
}

/// Whitelisted sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySortKey {
    Date,
    Pnl,
}

/// Parsed `key,direction` sort parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySort {
    pub key: HistorySortKey,
    pub descending: bool,
}

impl Default for HistorySort {
    fn default() -> Self {
        Self {
            key: HistorySortKey::Date,
            descending: true,
        }
    }
}

impl HistorySort {
    /// Parse a `"date,desc"`-style parameter. Unknown keys and directions
    /// fall back to the default (date descending) rather than erroring.
    pub fn parse(param: &str) -> Self {
        let mut parts = param.split(',');
        let key = match parts.next().map(str::trim) {
            Some("pnl") => HistorySortKey::Pnl,
            _ => HistorySortKey::Date,
        };
        let descending = !matches!(parts.next().map(str::trim), Some("asc"));
        Self { key, descending }
    }
}

/// Aggregate counts over a filtered range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStatsRow {
    pub total: i64,
    pub correct: i64,
    pub wrong: i64,
    pub unsolved: i64,
}

/// Lifetime aggregates for one member
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistorySummaryRow {
    pub total: i64,
    pub correct: i64,
    pub wrong: i64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    pub max_pnl: f64,
    pub min_pnl: f64,
}

/// Repository contract for simulation history rows
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// One page of rows matching the filter
    async fn select_page(
        &self,
        filter: &HistoryFilter,
        sort: HistorySort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<SimulationHistory>, DomainError>;

    /// Total number of rows matching the filter
    async fn count(&self, filter: &HistoryFilter) -> Result<i64, DomainError>;

    /// Outcome counts over the filtered range
    async fn select_stats(&self, filter: &HistoryFilter) -> Result<HistoryStatsRow, DomainError>;

    /// Lifetime aggregates for a member
    async fn select_summary(&self, member_no: i64) -> Result<HistorySummaryRow, DomainError>;
}
