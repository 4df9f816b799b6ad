//! Dashboard quote DTOs

use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for `GET /api/simulation/quotes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesQuery {
    /// Window start; derived from `unit` when absent
    pub from: Option<NaiveDate>,

    /// Window end (required)
    pub to: NaiveDate,

    /// Window size label: 10y, 5y, 1y, 3m, 1m, 1w
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "10y".to_string()
}
