//! Quote persistence interface

pub mod mock;
mod r#trait;

pub use mock::MockQuoteRepository;
pub use r#trait::QuoteRepository;
