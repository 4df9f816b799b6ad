//! Tests for the email verification service lifecycle

use std::sync::Arc;
use std::time::Duration as StdDuration;

use gs_shared::config::VerificationConfig;

use crate::errors::DomainError;
use crate::services::verification::EmailVerificationService;

use super::mocks::{MockHasher, MockMailSender};

fn config(ttl_seconds: i64, cooldown_seconds: i64) -> VerificationConfig {
    VerificationConfig {
        code_ttl_seconds: ttl_seconds,
        resend_cooldown_seconds: cooldown_seconds,
        cleanup_interval_seconds: 300,
    }
}

fn service(
    ttl_seconds: i64,
    cooldown_seconds: i64,
) -> (
    EmailVerificationService<MockMailSender, MockHasher>,
    Arc<MockMailSender>,
) {
    let mailer = Arc::new(MockMailSender::new(false));
    let hasher = Arc::new(MockHasher::new(false));
    let svc = EmailVerificationService::new(
        Arc::clone(&mailer),
        hasher,
        config(ttl_seconds, cooldown_seconds),
    );
    (svc, mailer)
}

#[tokio::test]
async fn send_dispatches_code_and_stores_hashed_entry() {
    let (svc, mailer) = service(180, 10);

    svc.send_code("user@example.com").await.unwrap();

    assert_eq!(mailer.sent_count(), 1);
    let code = mailer.last_code_for("user@example.com").unwrap();

    let entry = svc.store().peek("user@example.com").unwrap();
    assert!(!entry.verified);
    assert_ne!(entry.code_hash, code, "plaintext code must not be stored");
}

#[tokio::test]
async fn send_with_empty_email_is_a_silent_noop() {
    let (svc, mailer) = service(180, 10);

    svc.send_code("   ").await.unwrap();

    assert_eq!(mailer.sent_count(), 0);
    assert!(svc.store().is_empty());
}

#[tokio::test]
async fn resend_within_cooldown_changes_nothing() {
    let (svc, mailer) = service(180, 10);

    svc.send_code("user@example.com").await.unwrap();
    let first_entry = svc.store().peek("user@example.com").unwrap();

    svc.send_code("user@example.com").await.unwrap();

    assert_eq!(mailer.sent_count(), 1, "no second mail inside cooldown");
    assert_eq!(svc.store().peek("user@example.com").unwrap(), first_entry);
}

#[tokio::test]
async fn resend_after_cooldown_issues_a_fresh_code() {
    let (svc, mailer) = service(180, 0);

    svc.send_code("user@example.com").await.unwrap();
    let first_hash = svc.store().peek("user@example.com").unwrap().code_hash;

    svc.send_code("user@example.com").await.unwrap();

    assert_eq!(mailer.sent_count(), 2);
    let second = svc.store().peek("user@example.com").unwrap();
    assert_ne!(second.code_hash, first_hash, "entry replaced outright");
    assert!(!second.verified);
}

#[tokio::test]
async fn verify_succeeds_exactly_once_per_code() {
    let (svc, mailer) = service(180, 10);

    svc.send_code("user@example.com").await.unwrap();
    let code = mailer.last_code_for("user@example.com").unwrap();

    assert!(svc.verify_code("user@example.com", &code));
    // Second attempt with the same, previously correct code fails: the
    // entry is spent, not gone.
    assert!(!svc.verify_code("user@example.com", &code));
    assert!(svc.store().peek("user@example.com").unwrap().verified);
}

#[tokio::test]
async fn verify_rejects_wrong_code_and_keeps_entry_usable() {
    let (svc, mailer) = service(180, 10);

    svc.send_code("user@example.com").await.unwrap();
    let code = mailer.last_code_for("user@example.com").unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    assert!(!svc.verify_code("user@example.com", wrong));
    assert!(svc.verify_code("user@example.com", &code));
}

#[tokio::test]
async fn verify_rejects_expired_code() {
    let (svc, mailer) = service(0, 10);

    svc.send_code("user@example.com").await.unwrap();
    let code = mailer.last_code_for("user@example.com").unwrap();
    tokio::time::sleep(StdDuration::from_millis(10)).await;

    assert!(!svc.verify_code("user@example.com", &code));
}

#[tokio::test]
async fn verify_rejects_blank_and_unknown_input() {
    let (svc, _mailer) = service(180, 10);

    assert!(!svc.verify_code("", "123456"));
    assert!(!svc.verify_code("user@example.com", "  "));
    assert!(!svc.verify_code("nobody@example.com", "123456"));
}

#[tokio::test]
async fn email_is_normalized_on_send_and_verify() {
    let (svc, mailer) = service(180, 10);

    svc.send_code(" Foo@Bar.com ").await.unwrap();

    // Mail goes to the normalized address, and verification with any
    // spelling of the same address hits the same entry.
    let code = mailer.last_code_for("foo@bar.com").unwrap();
    assert!(svc.verify_code("FOO@bar.COM", &code));
}

#[tokio::test]
async fn cleanup_sweeps_only_expired_entries() {
    let (expired_svc, _m) = service(0, 10);
    expired_svc.send_code("old@x.com").await.unwrap();
    tokio::time::sleep(StdDuration::from_millis(10)).await;
    assert_eq!(expired_svc.cleanup(), 1);
    assert!(expired_svc.store().is_empty());

    let (live_svc, live_mailer) = service(180, 10);
    live_svc.send_code("live@x.com").await.unwrap();
    live_svc.send_code("spent@x.com").await.unwrap();
    let code = live_mailer.last_code_for("spent@x.com").unwrap();
    assert!(live_svc.verify_code("spent@x.com", &code));

    // Neither the pending nor the consumed entry has expired yet.
    assert_eq!(live_svc.cleanup(), 0);
    assert_eq!(live_svc.store().len(), 2);
}

#[tokio::test]
async fn mail_failure_propagates_but_entry_stays_stored() {
    let mailer = Arc::new(MockMailSender::new(true));
    let hasher = Arc::new(MockHasher::new(false));
    let svc = EmailVerificationService::new(Arc::clone(&mailer), hasher, config(180, 10));

    let err = svc.send_code("user@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Mail { .. }));

    // The code is valid but undelivered; the user waits out the cooldown
    // and requests a new one.
    assert!(svc.store().peek("user@example.com").is_some());
}

#[tokio::test]
async fn hasher_failure_aborts_the_send_before_any_state_change() {
    let mailer = Arc::new(MockMailSender::new(false));
    let hasher = Arc::new(MockHasher::new(true));
    let svc = EmailVerificationService::new(Arc::clone(&mailer), hasher, config(180, 10));

    let err = svc.send_code("user@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));

    assert!(svc.store().is_empty());
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn full_lifecycle_scenario() {
    let (svc, mailer) = service(180, 10);

    svc.send_code("a@x.com").await.unwrap();
    let code = mailer.last_code_for("a@x.com").unwrap();
    let wrong = if code == "111111" { "111112" } else { "111111" };

    assert!(!svc.verify_code("a@x.com", wrong));
    assert!(svc.verify_code("a@x.com", &code));
    assert!(!svc.verify_code("a@x.com", &code));
}

#[tokio::test]
async fn resend_noop_leaves_original_code_verifiable() {
    let (svc, mailer) = service(180, 10);

    svc.send_code("a@x.com").await.unwrap();
    let code = mailer.last_code_for("a@x.com").unwrap();

    // Inside the cooldown window: ignored, nothing replaced.
    svc.send_code("a@x.com").await.unwrap();
    assert_eq!(mailer.sent_count(), 1);

    assert!(svc.verify_code("a@x.com", &code));
}
