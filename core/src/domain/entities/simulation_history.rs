//! Trade-simulation history entry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One recorded simulation round for a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationHistory {
    pub history_no: i64,
    pub member_no: i64,

    /// Trading day the round was played on
    pub history_date: NaiveDate,

    /// Instrument/category label, e.g. `gold`
    pub history_type: String,

    /// Direction the member predicted (buy/sell)
    pub predicted: String,

    /// Realized direction; null until the round resolves
    pub actual: Option<String>,

    /// Profit and loss of the round
    pub pnl: Option<f64>,

    pub favorite: Option<bool>,
    pub tags: Option<String>,
    pub note: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}

/// Derived outcome of a history row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOutcome {
    Correct,
    Wrong,
    Unsolved,
}

impl HistoryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Wrong => "wrong",
            Self::Unsolved => "unsolved",
        }
    }
}

impl SimulationHistory {
    /// Outcome of the round: unsolved until `actual` resolves, then compared
    /// against the prediction
    pub fn outcome(&self) -> HistoryOutcome {
        match &self.actual {
            None => HistoryOutcome::Unsolved,
            Some(actual) if *actual == self.predicted => HistoryOutcome::Correct,
            Some(_) => HistoryOutcome::Wrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(predicted: &str, actual: Option<&str>) -> SimulationHistory {
        SimulationHistory {
            history_no: 1,
            member_no: 1,
            history_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            history_type: "gold".to_string(),
            predicted: predicted.to_string(),
            actual: actual.map(str::to_string),
            pnl: None,
            favorite: None,
            tags: None,
            note: None,
            created_at: None,
        }
    }

    #[test]
    fn outcome_derivation() {
        assert_eq!(row("buy", Some("buy")).outcome(), HistoryOutcome::Correct);
        assert_eq!(row("buy", Some("sell")).outcome(), HistoryOutcome::Wrong);
        assert_eq!(row("buy", None).outcome(), HistoryOutcome::Unsolved);
    }
}
