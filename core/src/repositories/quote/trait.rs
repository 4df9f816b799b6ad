//! Quote repository trait

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::quote::QuoteRow;
use crate::errors::DomainError;

/// Read-only access to the daily quote table
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Quote rows for `from..=to`, ordered by date ascending
    async fn select_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<QuoteRow>, DomainError>;
}
