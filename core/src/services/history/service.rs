//! Paginated and aggregated views over simulation history rows.

use std::sync::Arc;

use gs_shared::types::{PageRequest, PagedResponse};

use crate::errors::DomainResult;
use crate::repositories::history::{HistoryFilter, HistoryRepository, HistorySort};

use super::types::{HistoryItem, HistoryStats, HistorySummary};

/// Read-side service over a member's simulation history
pub struct HistoryService<R: HistoryRepository> {
    repository: Arc<R>,
}

impl<R: HistoryRepository> HistoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// One page of history rows plus the total match count
    pub async fn list(
        &self,
        filter: &HistoryFilter,
        sort: HistorySort,
        page: PageRequest,
    ) -> DomainResult<PagedResponse<HistoryItem>> {
        let rows = self
            .repository
            .select_page(filter, sort, page.offset(), page.limit())
            .await?;
        let total = self.repository.count(filter).await?;

        let items = rows.into_iter().map(HistoryItem::from).collect();
        Ok(PagedResponse::new(items, page, total))
    }

    /// Outcome counts and accuracy over a filtered range
    pub async fn stats(&self, filter: &HistoryFilter) -> DomainResult<HistoryStats> {
        let row = self.repository.select_stats(filter).await?;
        Ok(HistoryStats {
            total: row.total,
            correct: row.correct,
            wrong: row.wrong,
            unsolved: row.unsolved,
            accuracy: accuracy(row.correct, row.wrong),
        })
    }

    /// Lifetime aggregates for a member
    pub async fn summary(&self, member_no: i64) -> DomainResult<HistorySummary> {
        let row = self.repository.select_summary(member_no).await?;
        Ok(HistorySummary {
            total: row.total,
            correct: row.correct,
            wrong: row.wrong,
            unsolved: row.total - row.correct - row.wrong,
            total_pnl: row.total_pnl,
            avg_pnl: row.avg_pnl,
            max_pnl: row.max_pnl,
            min_pnl: row.min_pnl,
            accuracy: accuracy(row.correct, row.wrong),
        })
    }
}

/// correct / (correct + wrong), 0.0 when nothing has resolved yet
fn accuracy(correct: i64, wrong: i64) -> f64 {
    if correct + wrong > 0 {
        correct as f64 / (correct + wrong) as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod accuracy_tests {
    use super::accuracy;

    #[test]
    fn accuracy_handles_empty_denominator() {
        assert_eq!(accuracy(0, 0), 0.0);
        assert_eq!(accuracy(3, 1), 0.75);
        assert_eq!(accuracy(0, 4), 0.0);
    }
}
