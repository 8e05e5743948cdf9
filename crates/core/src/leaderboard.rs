//! Leaderboard module - bounded ranking of the fewest-attempt wins
//!
//! The leaderboard keeps no state of its own: every operation loads the stored
//! snapshot, and every insertion writes the whole (trimmed) list back.
//!
//! Ranking rules:
//! - Lower scores rank higher.
//! - Equal scores keep insertion order (the newcomer goes after older ties).
//! - Only the best `max_entries` survive an insertion.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::storage::Storage;
use crate::types::{ANONYMOUS_NAME, LEADERBOARD_KEY, LEADERBOARD_MAX};

/// One leaderboard row
///
/// Serialized as `{"name": "...", "score": 4, "date": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub date: NaiveDate,
}

impl LeaderboardEntry {
    /// Build an entry with a sanitized name
    pub fn new(name: &str, score: u32, date: NaiveDate) -> Self {
        Self {
            name: sanitize_name(name),
            score,
            date,
        }
    }
}

/// Trim the name; a blank name becomes `"Anonymous"`
pub fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ranking policy over a [`Storage`] snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaderboard {
    max_entries: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(LEADERBOARD_MAX)
    }
}

impl Leaderboard {
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Stored entries, as stored
    ///
    /// Missing or unparseable data reads as an empty leaderboard.
    pub fn all<S: Storage + ?Sized>(&self, store: &S) -> Vec<LeaderboardEntry> {
        let Some(raw) = store.get(LEADERBOARD_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("ignoring corrupt leaderboard data: {}", e);
                Vec::new()
            }
        }
    }

    /// Largest (worst) stored score, if any
    pub fn worst_score<S: Storage + ?Sized>(&self, store: &S) -> Option<u32> {
        self.all(store).iter().map(|e| e.score).max()
    }

    /// Whether `score` would earn a place right now
    ///
    /// True while the board has room; otherwise only a score strictly better
    /// than the current worst qualifies.
    pub fn is_qualifying<S: Storage + ?Sized>(&self, store: &S, score: u32) -> bool {
        let entries = self.all(store);
        if entries.len() < self.max_entries {
            return true;
        }
        entries
            .iter()
            .map(|e| e.score)
            .max()
            .map_or(false, |worst| score < worst)
    }

    /// Rank `entry` into `entries` without touching storage
    ///
    /// Returns the trimmed list and the new entry's index, or `None` if the
    /// trim evicted it.
    pub fn insert(
        &self,
        mut entries: Vec<LeaderboardEntry>,
        entry: LeaderboardEntry,
    ) -> (Vec<LeaderboardEntry>, Option<usize>) {
        // Stable: equal scores stay in stored order.
        entries.sort_by_key(|e| e.score);
        let score = entry.score;
        // After every existing equal score, as an append-then-stable-sort would place it.
        let index = entries.partition_point(|e| e.score <= score);
        entries.insert(index, entry);
        entries.truncate(self.max_entries);

        let position = (index < entries.len()).then_some(index);
        (entries, position)
    }

    /// Write the full list under the leaderboard key
    pub fn save<S: Storage + ?Sized>(
        &self,
        store: &mut S,
        entries: &[LeaderboardEntry],
    ) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(entries).map_err(|source| PersistenceError::Encode {
            key: LEADERBOARD_KEY,
            source,
        })?;
        store
            .set(LEADERBOARD_KEY, &json)
            .map_err(|source| PersistenceError::Storage {
                key: LEADERBOARD_KEY,
                source,
            })
    }

    /// Insert a score, trim, and persist the new snapshot
    ///
    /// Returns the index of the new entry, or `None` if it did not make the
    /// cut (possible when an equal score was already at the threshold).
    pub fn record<S: Storage + ?Sized>(
        &self,
        store: &mut S,
        name: &str,
        score: u32,
        date: NaiveDate,
    ) -> Result<Option<usize>, PersistenceError> {
        let entry = LeaderboardEntry::new(name, score, date);
        let (entries, position) = self.insert(self.all(store), entry);
        self.save(store, &entries)?;
        debug!(
            "recorded score {} at {:?} ({} entries)",
            score,
            position,
            entries.len()
        );
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry::new(name, score, day(1))
    }

    #[test]
    fn sanitize_name_trims_and_defaults() {
        assert_eq!(sanitize_name("  Ada "), "Ada");
        assert_eq!(sanitize_name(""), "Anonymous");
        assert_eq!(sanitize_name(" \t "), "Anonymous");
    }

    #[test]
    fn insert_places_ties_after_existing() {
        let board = Leaderboard::new(10);
        let (entries, pos) = board.insert(vec![entry("a", 3), entry("b", 5)], entry("c", 3));
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
        assert_eq!(pos, Some(1));
    }

    #[test]
    fn insert_reports_eviction() {
        let board = Leaderboard::new(2);
        let (entries, pos) = board.insert(vec![entry("a", 1), entry("b", 2)], entry("c", 2));
        assert_eq!(entries.len(), 2);
        assert_eq!(pos, None);
    }

    #[test]
    fn qualification_with_room() {
        let store = MemoryStorage::new();
        let board = Leaderboard::new(1);
        assert!(board.is_qualifying(&store, 1000));
        assert_eq!(board.worst_score(&store), None);
    }

    #[test]
    fn entry_serializes_with_iso_date() {
        let json = serde_json::to_string(&LeaderboardEntry::new("Ada", 4, day(9))).unwrap();
        assert_eq!(json, r#"{"name":"Ada","score":4,"date":"2024-03-09"}"#);
    }
}
