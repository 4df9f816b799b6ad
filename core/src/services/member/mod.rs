//! Member account service

mod service;

#[cfg(test)]
mod tests;

pub use service::{JoinRequest, MemberService};
