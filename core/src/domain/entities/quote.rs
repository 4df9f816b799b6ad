//! Daily gold quote row served to the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of market data.
///
/// Field names match the JSON contract consumed by the dashboard chart;
/// `pred_close` is the model prediction and is null when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub date: NaiveDate,
    pub fx_rate: Option<f64>,
    pub vix: Option<f64>,
    pub etf_volume: Option<f64>,
    pub gold_close: Option<f64>,
    pub pred_close: Option<f64>,
}
