//! File-backed storage for the guessing game.
//!
//! All keys live in one JSON object file:
//!
//! ```text
//! {"bestScore":"4","leaderboard":"[{\"name\":\"Ada\",\"score\":4,\"date\":\"2024-03-09\"}]"}
//! ```
//!
//! Values are opaque strings, exactly as the core hands them over. Every
//! [`Storage::get`] reads the file again so a second running game sees fresh
//! data, and every [`Storage::set`] rewrites the whole file through a
//! temporary sibling and a rename. A `set` whose read of the current file
//! fails is refused, so the other keys are never dropped. Two games writing at
//! the same moment can still overwrite each other's change.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use tui_guess_core::{Storage, StorageError};

type Values = BTreeMap<String, String>;

/// [`Storage`] persisted as a JSON object file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use `path` as the backing file (created on first write)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all stored values
    ///
    /// A missing file is empty; an unreadable or corrupt file is empty too,
    /// with a warning.
    pub fn load(&self) -> Values {
        match self.try_load() {
            Ok(values) => values,
            Err(e) => {
                warn!("cannot read {}: {}", self.path.display(), e);
                Values::new()
            }
        }
    }

    /// Read all stored values, failing when the file exists but cannot be read
    ///
    /// A missing file and a corrupt file both read as empty.
    pub fn try_load(&self) -> io::Result<Values> {
        self.decode(fs::read_to_string(&self.path))
    }

    fn decode(&self, read: io::Result<String>) -> io::Result<Values> {
        let raw = match read {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Values::new()),
            Err(e) => return Err(e),
        };
        match serde_json::from_str(&raw) {
            Ok(values) => Ok(values),
            Err(e) => {
                warn!("ignoring corrupt storage file {}: {}", self.path.display(), e);
                Ok(Values::new())
            }
        }
    }

    /// Merge `key` into the values from `read` and write the file back.
    fn set_from(
        &mut self,
        read: io::Result<String>,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        let mut values = self.decode(read).map_err(|err| StorageError::Write {
            key: key.to_string(),
            reason: format!("cannot read {}: {}", self.path.display(), err),
        })?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).map_err(|e| match e {
            StorageError::Write { reason, .. } => StorageError::Write {
                key: key.to_string(),
                reason,
            },
            StorageError::Io(err) => StorageError::Write {
                key: key.to_string(),
                reason: err.to_string(),
            },
        })?;
        debug!("stored `{}` in {}", key, self.path.display());
        Ok(())
    }

    fn write_all(&self, values: &Values) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(values).map_err(|e| StorageError::Write {
            key: String::new(),
            reason: e.to_string(),
        })?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let read = fs::read_to_string(&self.path);
        self.set_from(read, key, value)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tui-guess-store-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        dir.join("scores.json")
    }

    #[test]
    fn missing_file_reads_empty() {
        let store = FileStorage::new(scratch("missing"));
        assert_eq!(store.get("bestScore"), None);
        assert!(store.load().is_empty());
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn set_creates_parent_dirs_and_round_trips() {
        let path = scratch("round-trip");
        let mut store = FileStorage::new(&path);
        store.set("bestScore", "5").unwrap();
        store.set("leaderboard", "[]").unwrap();

        assert!(path.exists());
        assert!(!tmp_path(&path).exists());
        assert_eq!(store.get("bestScore").as_deref(), Some("5"));
        assert_eq!(store.get("leaderboard").as_deref(), Some("[]"));
    }

    #[test]
    fn reads_are_fresh_across_instances() {
        let path = scratch("fresh");
        let mut writer = FileStorage::new(&path);
        let reader = FileStorage::new(&path);

        writer.set("bestScore", "9").unwrap();
        assert_eq!(reader.get("bestScore").as_deref(), Some("9"));
        writer.set("bestScore", "4").unwrap();
        assert_eq!(reader.get("bestScore").as_deref(), Some("4"));
    }

    #[test]
    fn corrupt_file_reads_empty_and_is_replaced_on_write() {
        let path = scratch("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStorage::new(&path);
        assert_eq!(store.get("bestScore"), None);
        assert!(store.try_load().unwrap().is_empty());

        store.set("bestScore", "3").unwrap();
        assert_eq!(store.get("bestScore").as_deref(), Some("3"));
    }

    #[test]
    fn failed_read_refuses_write_and_keeps_other_keys() {
        let path = scratch("unreadable");
        let mut store = FileStorage::new(&path);
        store.set("bestScore", "5").unwrap();
        store.set("leaderboard", "[1]").unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let denied = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        match store.set_from(denied, "bestScore", "3") {
            Err(StorageError::Write { key, reason }) => {
                assert_eq!(key, "bestScore");
                assert!(reason.contains("cannot read"));
            }
            other => panic!("expected write error, got {:?}", other),
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(store.get("leaderboard").as_deref(), Some("[1]"));
        assert_eq!(store.get("bestScore").as_deref(), Some("5"));
    }

    #[test]
    fn unreadable_path_fails_try_load_and_set() {
        let path = scratch("blocked");
        // A directory where the file should be cannot be read as a file.
        fs::create_dir_all(&path).unwrap();

        let mut store = FileStorage::new(&path);
        assert!(store.try_load().is_err());
        assert!(store.load().is_empty());
        match store.set("leaderboard", "[]") {
            Err(StorageError::Write { key, .. }) => assert_eq!(key, "leaderboard"),
            other => panic!("expected write error, got {:?}", other),
        }
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let path = scratch("rename");
        fs::create_dir_all(&path).unwrap();

        let store = FileStorage::new(&path);
        let mut values = Values::new();
        values.insert("bestScore".to_string(), "2".to_string());

        assert!(store.write_all(&values).is_err());
        assert!(!tmp_path(&path).exists());
        assert!(path.is_dir());
    }
}
