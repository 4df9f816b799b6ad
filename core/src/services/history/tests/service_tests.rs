//! Tests for the history service against the in-memory repository

use std::sync::Arc;

use chrono::NaiveDate;

use gs_shared::types::PageRequest;

use crate::domain::entities::simulation_history::{HistoryOutcome, SimulationHistory};
use crate::repositories::history::{HistoryFilter, HistorySort, MockHistoryRepository};
use crate::services::history::HistoryService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn row(
    no: i64,
    day: NaiveDate,
    predicted: &str,
    actual: Option<&str>,
    pnl: Option<f64>,
) -> SimulationHistory {
    SimulationHistory {
        history_no: no,
        member_no: 1,
        history_date: day,
        history_type: "gold".to_string(),
        predicted: predicted.to_string(),
        actual: actual.map(str::to_string),
        pnl,
        favorite: None,
        tags: None,
        note: None,
        created_at: None,
    }
}

fn filter() -> HistoryFilter {
    HistoryFilter {
        member_no: 1,
        from: date(2024, 1, 1),
        to: date(2024, 12, 31),
        history_type: None,
    }
}

fn service() -> HistoryService<MockHistoryRepository> {
    let repo = MockHistoryRepository::with_rows(vec![
        row(1, date(2024, 3, 1), "buy", Some("buy"), Some(120.0)),
        row(2, date(2024, 3, 2), "buy", Some("sell"), Some(-80.0)),
        row(3, date(2024, 3, 3), "sell", Some("sell"), Some(40.0)),
        row(4, date(2024, 3, 4), "buy", None, None),
    ]);
    HistoryService::new(Arc::new(repo))
}

#[tokio::test]
async fn list_pages_and_derives_outcomes() {
    let svc = service();

    let page = svc
        .list(&filter(), HistorySort::default(), PageRequest::new(1, 2))
        .await
        .unwrap();

    assert_eq!(page.total, 4);
    assert_eq!(page.items.len(), 2);
    // Default sort is date descending.
    assert_eq!(page.items[0].id, 4);
    assert_eq!(page.items[0].result, HistoryOutcome::Unsolved);
    assert_eq!(page.items[1].id, 3);
    assert_eq!(page.items[1].result, HistoryOutcome::Correct);
}

#[tokio::test]
async fn list_second_page_continues_where_first_ended() {
    let svc = service();

    let page = svc
        .list(&filter(), HistorySort::default(), PageRequest::new(2, 2))
        .await
        .unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, 2);
    assert_eq!(page.items[0].result, HistoryOutcome::Wrong);
}

#[tokio::test]
async fn stats_counts_outcomes_and_accuracy() {
    let svc = service();

    let stats = svc.stats(&filter()).await.unwrap();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.correct, 2);
    assert_eq!(stats.wrong, 1);
    assert_eq!(stats.unsolved, 1);
    // 2 correct out of 3 resolved rounds.
    assert!((stats.accuracy - 2.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn stats_accuracy_is_zero_with_no_resolved_rows() {
    let repo = MockHistoryRepository::with_rows(vec![row(1, date(2024, 3, 4), "buy", None, None)]);
    let svc = HistoryService::new(Arc::new(repo));

    let stats = svc.stats(&filter()).await.unwrap();
    assert_eq!(stats.accuracy, 0.0);
}

#[tokio::test]
async fn summary_aggregates_pnl() {
    let svc = service();

    let summary = svc.summary(1).await.unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.unsolved, 1);
    assert!((summary.total_pnl - 80.0).abs() < 1e-9);
    assert!((summary.avg_pnl - 80.0 / 3.0).abs() < 1e-9);
    assert_eq!(summary.max_pnl, 120.0);
    assert_eq!(summary.min_pnl, -80.0);
}

#[tokio::test]
async fn type_filter_narrows_the_range() {
    let repo = MockHistoryRepository::with_rows(vec![
        row(1, date(2024, 3, 1), "buy", Some("buy"), None),
        SimulationHistory {
            history_type: "silver".to_string(),
            ..row(2, date(2024, 3, 2), "buy", Some("buy"), None)
        },
    ]);
    let svc = HistoryService::new(Arc::new(repo));

    let narrowed = HistoryFilter {
        history_type: Some("silver".to_string()),
        ..filter()
    };
    let page = svc
        .list(&narrowed, HistorySort::default(), PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, 2);
}
