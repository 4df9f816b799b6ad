//! Member persistence interface

pub mod mock;
mod r#trait;

pub use mock::MockMemberRepository;
pub use r#trait::MemberRepository;
