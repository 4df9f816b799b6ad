//! Auth and account routes

pub mod email;
pub mod member;
pub mod password;
