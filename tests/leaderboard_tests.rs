//! Integration tests for the persisted leaderboard

use chrono::NaiveDate;
use tui_guess::core::{
    Leaderboard, LeaderboardEntry, MemoryStorage, PersistenceError, Storage, StorageError,
};
use tui_guess::types::{LEADERBOARD_KEY, LEADERBOARD_MAX};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn scores(entries: &[LeaderboardEntry]) -> Vec<u32> {
    entries.iter().map(|e| e.score).collect()
}

fn names(entries: &[LeaderboardEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// Store that keeps reads working but refuses every write.
#[derive(Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl Storage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }
}

#[test]
fn test_empty_store_reads_empty() {
    let store = MemoryStorage::new();
    let board = Leaderboard::default();
    assert!(board.all(&store).is_empty());
    assert_eq!(board.max_entries(), LEADERBOARD_MAX);
}

#[test]
fn test_records_sorted_with_stable_ties() {
    let mut store = MemoryStorage::new();
    let board = Leaderboard::default();

    board.record(&mut store, "first", 7, day(1)).unwrap();
    board.record(&mut store, "second", 3, day(2)).unwrap();
    board.record(&mut store, "third", 9, day(3)).unwrap();
    let pos = board.record(&mut store, "fourth", 3, day(4)).unwrap();

    let entries = board.all(&store);
    assert_eq!(scores(&entries), vec![3, 3, 7, 9]);
    assert_eq!(names(&entries), vec!["second", "fourth", "first", "third"]);
    assert_eq!(pos, Some(1));
}

#[test]
fn test_bounded_length_evicts_worst() {
    let mut store = MemoryStorage::new();
    let board = Leaderboard::new(2);

    assert_eq!(board.record(&mut store, "a", 5, day(1)).unwrap(), Some(0));
    assert_eq!(board.record(&mut store, "b", 8, day(1)).unwrap(), Some(1));
    assert_eq!(board.record(&mut store, "c", 2, day(1)).unwrap(), Some(0));

    let entries = board.all(&store);
    assert_eq!(names(&entries), vec!["c", "a"]);
}

#[test]
fn test_full_board_of_ten() {
    let mut store = MemoryStorage::new();
    let board = Leaderboard::default();
    for score in (1..=12).rev() {
        board.record(&mut store, "p", score, day(1)).unwrap();
    }
    assert_eq!(scores(&board.all(&store)), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_qualifying_threshold() {
    let mut store = MemoryStorage::new();
    let board = Leaderboard::new(2);

    // Short board: anything qualifies.
    assert!(board.is_qualifying(&store, 50));
    board.record(&mut store, "a", 4, day(1)).unwrap();
    assert!(board.is_qualifying(&store, 50));
    board.record(&mut store, "b", 6, day(1)).unwrap();

    // Full board: strictly better than the worst.
    assert!(board.is_qualifying(&store, 5));
    assert!(!board.is_qualifying(&store, 6));
    assert!(!board.is_qualifying(&store, 7));
    assert_eq!(board.worst_score(&store), Some(6));
}

#[test]
fn test_better_score_evicts_worst_on_full_board() {
    let mut store = MemoryStorage::new();
    let board = Leaderboard::new(2);
    board.record(&mut store, "one", 1, day(1)).unwrap();
    board.record(&mut store, "two", 2, day(2)).unwrap();

    assert!(!board.is_qualifying(&store, 5));
    assert!(board.is_qualifying(&store, 0));

    assert_eq!(board.record(&mut store, "zero", 0, day(3)).unwrap(), Some(0));
    let entries = board.all(&store);
    assert_eq!(scores(&entries), vec![0, 1]);
    assert_eq!(names(&entries), vec!["zero", "one"]);
}

#[test]
fn test_evicted_equal_score_reports_none() {
    let mut store = MemoryStorage::new();
    let board = Leaderboard::new(2);
    board.record(&mut store, "a", 3, day(1)).unwrap();
    board.record(&mut store, "b", 3, day(1)).unwrap();

    assert_eq!(board.record(&mut store, "c", 3, day(1)).unwrap(), None);
    assert_eq!(names(&board.all(&store)), vec!["a", "b"]);
}

#[test]
fn test_corrupt_data_reads_empty() {
    let mut store = MemoryStorage::new();
    store.set(LEADERBOARD_KEY, "{not json").unwrap();

    let board = Leaderboard::default();
    assert!(board.all(&store).is_empty());

    // Recording overwrites the corrupt value with a valid snapshot.
    board.record(&mut store, "Ada", 4, day(9)).unwrap();
    assert_eq!(scores(&board.all(&store)), vec![4]);
}

#[test]
fn test_json_layout() {
    let mut store = MemoryStorage::new();
    Leaderboard::default()
        .record(&mut store, "Ada", 4, day(9))
        .unwrap();

    let raw = store.get(LEADERBOARD_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"name": "Ada", "score": 4, "date": "2024-03-09"}])
    );
}

#[test]
fn test_blank_name_becomes_anonymous() {
    let mut store = MemoryStorage::new();
    let board = Leaderboard::default();
    board.record(&mut store, "   ", 12, day(1)).unwrap();
    board.record(&mut store, "  Bob ", 13, day(1)).unwrap();
    assert_eq!(names(&board.all(&store)), vec!["Anonymous", "Bob"]);
}

#[test]
fn test_failed_write_is_reported() {
    let mut store = ReadOnlyStorage::default();
    let board = Leaderboard::default();

    let err = board.record(&mut store, "Ada", 4, day(1)).unwrap_err();
    assert!(matches!(err, PersistenceError::Storage { .. }));
    assert_eq!(err.key(), LEADERBOARD_KEY);
    assert!(board.all(&store).is_empty());
}
