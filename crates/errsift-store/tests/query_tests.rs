//! Integration tests for errsift-store
//!
//! These tests verify the task query contract: the non-empty-error filter,
//! case-insensitive keyword matching, the strict lower bound, ordering, and
//! the latest-seen result.

use errsift_domain::{LatestSeen, Timestamp, Watermark};
use errsift_store::TaskStore;
use rusqlite::{params, Connection};

const SCHEMA: &str = "CREATE TABLE tasks (
    task_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    error_text TEXT
)";

fn seeded_store(rows: &[(&str, &str, Option<&str>)]) -> TaskStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute(SCHEMA, []).unwrap();
    for (task_id, created_at, error_text) in rows {
        conn.execute(
            "INSERT INTO tasks (task_id, created_at, error_text) VALUES (?1, ?2, ?3)",
            params![task_id, created_at, error_text],
        )
        .unwrap();
    }
    TaskStore::from_connection(conn)
}

fn ts(text: &str) -> Timestamp {
    Timestamp::parse(text).unwrap()
}

fn epoch() -> Timestamp {
    Watermark::Unset.lower_bound()
}

#[test]
fn test_skips_rows_without_error_text() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000000", Some("disk full")),
        ("t2", "2024-01-01 11:00:00.000000", None),
        ("t3", "2024-01-01 12:00:00.000000", Some("")),
    ]);

    let batch = store.query_errors("", epoch()).unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].task_id, "t1");
}

#[test]
fn test_keyword_match_is_case_insensitive() {
    let store = seeded_store(&[(
        "t1",
        "2024-01-01 10:00:00.000000",
        Some("connection timeout occurred"),
    )]);

    let batch = store.query_errors("TIMEOUT", epoch()).unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].error_text, "connection timeout occurred");
}

#[test]
fn test_keyword_is_substring_not_whole_word() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000000", Some("subprocess timeouts")),
        ("t2", "2024-01-01 11:00:00.000000", Some("exit code 1")),
    ]);

    let batch = store.query_errors("timeout", epoch()).unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].task_id, "t1");
}

#[test]
fn test_like_wildcards_in_keyword_are_literal() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000000", Some("loaded 100% then died")),
        ("t2", "2024-01-01 11:00:00.000000", Some("loaded 100 rows")),
    ]);

    let batch = store.query_errors("100%", epoch()).unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].task_id, "t1");
}

#[test]
fn test_empty_keyword_applies_no_text_filter() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000000", Some("disk full")),
        ("t2", "2024-01-01 11:00:00.000000", Some("oom killed")),
    ]);

    let batch = store.query_errors("", epoch()).unwrap();
    assert_eq!(batch.records.len(), 2);
}

#[test]
fn test_lower_bound_is_strict() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000000", Some("disk full")),
        ("t2", "2024-01-02 10:00:00.000000", Some("oom killed")),
    ]);

    // A row created exactly at the bound is already processed
    let batch = store
        .query_errors("", ts("2024-01-01 10:00:00.000000"))
        .unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].task_id, "t2");
}

#[test]
fn test_bound_respects_microseconds() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000001", Some("disk full")),
        ("t2", "2024-01-01 10:00:00.000002", Some("oom killed")),
    ]);

    let batch = store
        .query_errors("", ts("2024-01-01 10:00:00.000001"))
        .unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].task_id, "t2");
}

#[test]
fn test_results_ordered_newest_first() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000000", Some("disk full")),
        ("t3", "2024-01-03 10:00:00.000000", Some("disk full")),
        ("t2", "2024-01-02 10:00:00.000000", Some("disk full")),
    ]);

    let batch = store.query_errors("", epoch()).unwrap();
    let order: Vec<&str> = batch.records.iter().map(|r| r.task_id.as_str()).collect();
    assert_eq!(order, vec!["t3", "t2", "t1"]);
}

#[test]
fn test_latest_seen_is_maximum_creation_time() {
    let store = seeded_store(&[
        ("t1", "2024-01-01 10:00:00.000000", Some("disk full")),
        ("t2", "2024-01-02 10:00:00.000000", Some("disk full")),
    ]);

    let batch = store.query_errors("", epoch()).unwrap();
    assert_eq!(
        batch.latest_seen,
        LatestSeen::Observed(ts("2024-01-02 10:00:00.000000"))
    );
}

#[test]
fn test_zero_matches_is_none_found() {
    let store = seeded_store(&[("t1", "2024-01-01 10:00:00.000000", Some("disk full"))]);

    let batch = store.query_errors("timeout", epoch()).unwrap();
    assert!(batch.records.is_empty());
    assert_eq!(batch.latest_seen, LatestSeen::NoneFound);
}

#[test]
fn test_malformed_created_at_is_fatal() {
    let store = seeded_store(&[("t1", "last tuesday", Some("disk full"))]);

    let result = store.query_errors("", epoch());
    assert!(result.is_err(), "a row with a bad timestamp must abort the query");
}
