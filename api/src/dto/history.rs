//! Simulation history DTOs

use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for `GET /api/history`
///
/// Defaults mirror the frontend's initial dashboard view.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_from")]
    pub from: NaiveDate,

    #[serde(default = "default_to")]
    pub to: NaiveDate,

    /// Instrument filter; empty string means all types
    #[serde(default, rename = "type")]
    pub history_type: String,

    /// `key,direction` pair, e.g. `date,desc` or `pnl,asc`
    #[serde(default = "default_sort")]
    pub sort: String,

    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_size")]
    pub size: u32,
}

/// Query parameters for `GET /api/history/stats`
#[derive(Debug, Clone, Deserialize)]
pub struct StatsQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,

    #[serde(default, rename = "type")]
    pub history_type: String,
}

fn default_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid default date")
}

fn default_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid default date")
}

fn default_sort() -> String {
    "date,desc".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    20
}
