//! Result types for the history service

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::simulation_history::{HistoryOutcome, SimulationHistory};

/// One history row as served to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: i64,
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub history_type: String,

    /// Direction the member predicted
    pub answer: String,

    /// Realized direction, null until resolved
    pub actual: Option<String>,

    pub result: HistoryOutcome,
    pub pnl: Option<f64>,
    pub note: Option<String>,
}

impl From<SimulationHistory> for HistoryItem {
    fn from(row: SimulationHistory) -> Self {
        let result = row.outcome();
        Self {
            id: row.history_no,
            date: row.history_date,
            history_type: row.history_type,
            answer: row.predicted,
            actual: row.actual,
            result,
            pnl: row.pnl,
            note: row.note,
        }
    }
}

/// Outcome counts plus accuracy over a filtered range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total: i64,
    pub correct: i64,
    pub wrong: i64,
    pub unsolved: i64,

    /// correct / (correct + wrong); 0.0 when nothing has resolved
    pub accuracy: f64,
}

/// Lifetime aggregates for one member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total: i64,
    pub correct: i64,
    pub wrong: i64,
    pub unsolved: i64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    pub max_pnl: f64,
    pub min_pnl: f64,
    pub accuracy: f64,
}
