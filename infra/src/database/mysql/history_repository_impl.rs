//! MySQL implementation of the HistoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gs_core::domain::entities::simulation_history::SimulationHistory;
use gs_core::errors::DomainError;
use gs_core::repositories::history::{
    HistoryFilter, HistoryRepository, HistorySort, HistorySortKey, HistoryStatsRow,
    HistorySummaryRow,
};

/// MySQL-backed history repository over the `simulation_history` table
pub struct MySqlHistoryRepository {
    pool: MySqlPool,
}

impl MySqlHistoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_history(row: &sqlx::mysql::MySqlRow) -> Result<SimulationHistory, DomainError> {
        Ok(SimulationHistory {
            history_no: row.try_get("history_no").map_err(db_err)?,
            member_no: row.try_get("member_no").map_err(db_err)?,
            history_date: row.try_get("history_date").map_err(db_err)?,
            history_type: row.try_get("history_type").map_err(db_err)?,
            predicted: row.try_get("predicted").map_err(db_err)?,
            actual: row.try_get("actual").map_err(db_err)?,
            pnl: row.try_get("pnl").map_err(db_err)?,
            favorite: row.try_get("favorite").map_err(db_err)?,
            tags: row.try_get("tags").map_err(db_err)?,
            note: row.try_get("note").map_err(db_err)?,
            created_at: row
                .try_get::<Option<DateTime<Utc>>, _>("created_at")
                .map_err(db_err)?,
        })
    }

    /// ORDER BY fragment from the whitelisted sort; never interpolates
    /// client input
    fn order_clause(sort: HistorySort) -> &'static str {
        match (sort.key, sort.descending) {
            (HistorySortKey::Date, true) => "history_date DESC, history_no DESC",
            (HistorySortKey::Date, false) => "history_date ASC, history_no ASC",
            (HistorySortKey::Pnl, true) => "pnl DESC, history_no DESC",
            (HistorySortKey::Pnl, false) => "pnl ASC, history_no ASC",
        }
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("history query failed: {e}"),
    }
}

#[async_trait]
impl HistoryRepository for MySqlHistoryRepository {
    async fn select_page(
        &self,
        filter: &HistoryFilter,
        sort: HistorySort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<SimulationHistory>, DomainError> {
        let type_clause = if filter.history_type.is_some() {
            " AND history_type = ?"
        } else {
            ""
        };
        let query = format!(
            r#"
            SELECT history_no, member_no, history_date, history_type, predicted,
                   actual, pnl, favorite, tags, note, created_at
            FROM simulation_history
            WHERE member_no = ? AND history_date BETWEEN ? AND ?{}
            ORDER BY {}
            LIMIT ? OFFSET ?
            "#,
            type_clause,
            Self::order_clause(sort)
        );

        let mut q = sqlx::query(&query)
            .bind(filter.member_no)
            .bind(filter.from)
            .bind(filter.to);
        if let Some(history_type) = &filter.history_type {
            q = q.bind(history_type);
        }
        let rows = q
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(Self::row_to_history).collect()
    }

    async fn count(&self, filter: &HistoryFilter) -> Result<i64, DomainError> {
        let type_clause = if filter.history_type.is_some() {
            " AND history_type = ?"
        } else {
            ""
        };
        let query = format!(
            "SELECT COUNT(*) AS cnt FROM simulation_history
             WHERE member_no = ? AND history_date BETWEEN ? AND ?{type_clause}"
        );

        let mut q = sqlx::query(&query)
            .bind(filter.member_no)
            .bind(filter.from)
            .bind(filter.to);
        if let Some(history_type) = &filter.history_type {
            q = q.bind(history_type);
        }
        let row = q.fetch_one(&self.pool).await.map_err(db_err)?;

        row.try_get("cnt").map_err(db_err)
    }

    async fn select_stats(&self, filter: &HistoryFilter) -> Result<HistoryStatsRow, DomainError> {
        let type_clause = if filter.history_type.is_some() {
            " AND history_type = ?"
        } else {
            ""
        };
        let query = format!(
            r#"
            SELECT COUNT(*) AS total,
                   CAST(COALESCE(SUM(actual IS NOT NULL AND actual = predicted), 0) AS SIGNED) AS correct,
                   CAST(COALESCE(SUM(actual IS NOT NULL AND actual <> predicted), 0) AS SIGNED) AS wrong,
                   CAST(COALESCE(SUM(actual IS NULL), 0) AS SIGNED) AS unsolved
            FROM simulation_history
            WHERE member_no = ? AND history_date BETWEEN ? AND ?{type_clause}
            "#
        );

        let mut q = sqlx::query(&query)
            .bind(filter.member_no)
            .bind(filter.from)
            .bind(filter.to);
        if let Some(history_type) = &filter.history_type {
            q = q.bind(history_type);
        }
        let row = q.fetch_one(&self.pool).await.map_err(db_err)?;

        Ok(HistoryStatsRow {
            total: row.try_get("total").map_err(db_err)?,
            correct: row.try_get("correct").map_err(db_err)?,
            wrong: row.try_get("wrong").map_err(db_err)?,
            unsolved: row.try_get("unsolved").map_err(db_err)?,
        })
    }

    async fn select_summary(&self, member_no: i64) -> Result<HistorySummaryRow, DomainError> {
        let query = r#"
            SELECT COUNT(*) AS total,
                   CAST(COALESCE(SUM(actual IS NOT NULL AND actual = predicted), 0) AS SIGNED) AS correct,
                   CAST(COALESCE(SUM(actual IS NOT NULL AND actual <> predicted), 0) AS SIGNED) AS wrong,
                   COALESCE(SUM(pnl), 0) AS total_pnl,
                   COALESCE(AVG(pnl), 0) AS avg_pnl,
                   COALESCE(MAX(pnl), 0) AS max_pnl,
                   COALESCE(MIN(pnl), 0) AS min_pnl
            FROM simulation_history
            WHERE member_no = ?
        "#;

        let row = sqlx::query(query)
            .bind(member_no)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(HistorySummaryRow {
            total: row.try_get("total").map_err(db_err)?,
            correct: row.try_get("correct").map_err(db_err)?,
            wrong: row.try_get("wrong").map_err(db_err)?,
            total_pnl: row.try_get("total_pnl").map_err(db_err)?,
            avg_pnl: row.try_get("avg_pnl").map_err(db_err)?,
            max_pnl: row.try_get("max_pnl").map_err(db_err)?,
            min_pnl: row.try_get("min_pnl").map_err(db_err)?,
        })
    }
}
