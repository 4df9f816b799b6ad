//! MySQL repository implementations

mod history_repository_impl;
mod member_repository_impl;
mod quote_repository_impl;

pub use history_repository_impl::MySqlHistoryRepository;
pub use member_repository_impl::MySqlMemberRepository;
pub use quote_repository_impl::MySqlQuoteRepository;
