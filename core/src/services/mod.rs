//! Business services

pub mod dashboard;
pub mod history;
pub mod member;
pub mod token;
pub mod traits;
pub mod verification;

pub use dashboard::DashboardService;
pub use history::HistoryService;
pub use member::MemberService;
pub use token::{AccessClaims, TokenService};
pub use traits::{MailSenderTrait, PasswordHasherTrait};
pub use verification::EmailVerificationService;
