//! In-memory history repository for tests and mock wiring.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::simulation_history::{HistoryOutcome, SimulationHistory};
use crate::errors::DomainError;

use super::{
    HistoryFilter, HistoryRepository, HistorySort, HistorySortKey, HistoryStatsRow,
    HistorySummaryRow,
};

/// Vec-backed `HistoryRepository`
#[derive(Default)]
pub struct MockHistoryRepository {
    rows: Mutex<Vec<SimulationHistory>>,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<SimulationHistory>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn push(&self, row: SimulationHistory) {
        self.rows.lock().unwrap().push(row);
    }

    fn matching(&self, filter: &HistoryFilter) -> Vec<SimulationHistory> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.member_no == filter.member_no
                    && r.history_date >= filter.from
                    && r.history_date <= filter.to
                    && filter
                        .history_type
                        .as_ref()
                        .map_or(true, |t| &r.history_type == t)
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn select_page(
        &self,
        filter: &HistoryFilter,
        sort: HistorySort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<SimulationHistory>, DomainError> {
        let mut rows = self.matching(filter);
        match sort.key {
            HistorySortKey::Date => rows.sort_by_key(|r| r.history_date),
            HistorySortKey::Pnl => rows.sort_by(|a, b| {
                a.pnl
                    .unwrap_or(0.0)
                    .partial_cmp(&b.pnl.unwrap_or(0.0))
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        if sort.descending {
            rows.reverse();
        }
        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, filter: &HistoryFilter) -> Result<i64, DomainError> {
        Ok(self.matching(filter).len() as i64)
    }

    async fn select_stats(&self, filter: &HistoryFilter) -> Result<HistoryStatsRow, DomainError> {
        let rows = self.matching(filter);
        let mut stats = HistoryStatsRow {
            total: rows.len() as i64,
            ..Default::default()
        };
        for row in &rows {
            match row.outcome() {
                HistoryOutcome::Correct => stats.correct += 1,
                HistoryOutcome::Wrong => stats.wrong += 1,
                HistoryOutcome::Unsolved => stats.unsolved += 1,
            }
        }
        Ok(stats)
    }

    async fn select_summary(&self, member_no: i64) -> Result<HistorySummaryRow, DomainError> {
        let rows: Vec<SimulationHistory> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.member_no == member_no)
            .cloned()
            .collect();

        let mut summary = HistorySummaryRow {
            total: rows.len() as i64,
            ..Default::default()
        };
        let pnls: Vec<f64> = rows.iter().filter_map(|r| r.pnl).collect();
        for row in &rows {
            match row.outcome() {
                HistoryOutcome::Correct => summary.correct += 1,
                HistoryOutcome::Wrong => summary.wrong += 1,
                HistoryOutcome::Unsolved => {}
            }
        }
        if !pnls.is_empty() {
            summary.total_pnl = pnls.iter().sum();
            summary.avg_pnl = summary.total_pnl / pnls.len() as f64;
            summary.max_pnl = pnls.iter().cloned().fold(f64::MIN, f64::max);
            summary.min_pnl = pnls.iter().cloned().fold(f64::MAX, f64::min);
        }
        Ok(summary)
    }
}
