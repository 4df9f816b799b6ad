//! Email address helpers
//!
//! Every component that keys state by email address goes through
//! `normalize` first, so `" Foo@Bar.com "` and `"foo@bar.com"` always refer
//! to the same record.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Normalize an email address: trim surrounding whitespace and lowercase.
///
/// Returns an empty string for empty/whitespace-only input; callers treat
/// that as "nothing to do".
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Basic shape check for an email address (`local@domain.tld`)
pub fn is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Mask an email address for log output: `alice@example.com` becomes
/// `a***@example.com`
pub fn mask(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{first}***@{domain}")
        }
        _ => String::from("***"),
    }
}
