//! Quote range resolution for the dashboard chart.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::domain::entities::quote::QuoteRow;
use crate::errors::DomainResult;
use crate::repositories::quote::QuoteRepository;

/// Serves daily quote rows for a requested window
pub struct DashboardService<Q: QuoteRepository> {
    quotes: Arc<Q>,
}

impl<Q: QuoteRepository> DashboardService<Q> {
    pub fn new(quotes: Arc<Q>) -> Self {
        Self { quotes }
    }

    /// Quote rows ending at `to`.
    ///
    /// An explicit `from` wins; otherwise the window is derived from the
    /// unit label (`10y`, `5y`, `1y`, `3m`, `1m`, `1w`), defaulting to one
    /// year for anything unrecognized.
    pub async fn quotes(
        &self,
        to: NaiveDate,
        unit: &str,
        from: Option<NaiveDate>,
    ) -> DomainResult<Vec<QuoteRow>> {
        let from = from.unwrap_or_else(|| to - Duration::days(unit_days(unit) - 1));
        self.quotes.select_range(from, to).await
    }
}

/// Window size in days for a unit label
fn unit_days(unit: &str) -> i64 {
    match unit {
        "10y" => 3650,
        "5y" => 1825,
        "1y" => 365,
        "3m" => 90,
        "1m" => 30,
        "1w" => 7,
        _ => 365,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::quote::MockQuoteRepository;

    fn row(date: NaiveDate) -> QuoteRow {
        QuoteRow {
            date,
            fx_rate: Some(1300.0),
            vix: Some(15.0),
            etf_volume: Some(1_000_000.0),
            gold_close: Some(2300.0),
            pred_close: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unit_mapping() {
        assert_eq!(unit_days("10y"), 3650);
        assert_eq!(unit_days("5y"), 1825);
        assert_eq!(unit_days("1y"), 365);
        assert_eq!(unit_days("3m"), 90);
        assert_eq!(unit_days("1m"), 30);
        assert_eq!(unit_days("1w"), 7);
        assert_eq!(unit_days("banana"), 365);
    }

    #[tokio::test]
    async fn window_is_derived_from_unit() {
        let repo = Arc::new(MockQuoteRepository::with_rows(vec![
            row(date(2024, 9, 24)),
            row(date(2024, 9, 30)),
            row(date(2024, 10, 1)),
            // One day before the 1w window opens.
            row(date(2024, 9, 23)),
        ]));
        let svc = DashboardService::new(repo);

        // 1w window ending 2024-10-01 opens on 2024-09-25.
        let rows = svc.quotes(date(2024, 10, 1), "1w", None).await.unwrap();
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2024, 9, 30), date(2024, 10, 1)]);
    }

    #[tokio::test]
    async fn explicit_from_overrides_unit() {
        let repo = Arc::new(MockQuoteRepository::with_rows(vec![
            row(date(2024, 6, 1)),
            row(date(2024, 8, 1)),
            row(date(2024, 10, 1)),
        ]));
        let svc = DashboardService::new(repo);

        let rows = svc
            .quotes(date(2024, 10, 1), "1w", Some(date(2024, 7, 1)))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date(2024, 8, 1));
    }
}
