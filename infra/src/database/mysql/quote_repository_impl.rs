//! MySQL implementation of the QuoteRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{MySqlPool, Row};

use gs_core::domain::entities::quote::QuoteRow;
use gs_core::errors::DomainError;
use gs_core::repositories::quote::QuoteRepository;

/// MySQL-backed quote repository over the `quotes_daily` table
pub struct MySqlQuoteRepository {
    pool: MySqlPool,
}

impl MySqlQuoteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("quote query failed: {e}"),
    }
}

#[async_trait]
impl QuoteRepository for MySqlQuoteRepository {
    async fn select_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<QuoteRow>, DomainError> {
        let query = r#"
            SELECT quote_date, fx_rate, vix, etf_volume, gold_close, pred_close
            FROM quotes_daily
            WHERE quote_date BETWEEN ? AND ?
            ORDER BY quote_date
        "#;

        let rows = sqlx::query(query)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter()
            .map(|row| {
                Ok(QuoteRow {
                    date: row.try_get("quote_date").map_err(db_err)?,
                    fx_rate: row.try_get("fx_rate").map_err(db_err)?,
                    vix: row.try_get("vix").map_err(db_err)?,
                    etf_volume: row.try_get("etf_volume").map_err(db_err)?,
                    gold_close: row.try_get("gold_close").map_err(db_err)?,
                    pred_close: row.try_get("pred_close").map_err(db_err)?,
                })
            })
            .collect()
    }
}
