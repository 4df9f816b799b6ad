//! In-memory quote repository for tests and mock wiring.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::quote::QuoteRow;
use crate::errors::DomainError;

use super::QuoteRepository;

/// Vec-backed `QuoteRepository`
#[derive(Default)]
pub struct MockQuoteRepository {
    rows: Mutex<Vec<QuoteRow>>,
}

impl MockQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<QuoteRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn push(&self, row: QuoteRow) {
        self.rows.lock().unwrap().push(row);
    }
}

#[async_trait]
impl QuoteRepository for MockQuoteRepository {
    async fn select_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<QuoteRow>, DomainError> {
        let mut rows: Vec<QuoteRow> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.date);
        Ok(rows)
    }
}
