//! Domain entities

pub mod member;
pub mod quote;
pub mod simulation_history;
pub mod verification_entry;

pub use member::{Member, MemberProfile};
pub use quote::QuoteRow;
pub use simulation_history::{HistoryOutcome, SimulationHistory};
pub use verification_entry::VerificationEntry;
