//! Best score - the fewest attempts any finished round has needed.

use log::warn;

use crate::error::PersistenceError;
use crate::storage::Storage;
use crate::types::BEST_SCORE_KEY;

/// Cached best score backed by the `bestScore` storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    value: Option<u32>,
}

impl BestScore {
    /// Read the stored value; absent or unparseable means unset
    pub fn load<S: Storage + ?Sized>(store: &S) -> Self {
        let value = store.get(BEST_SCORE_KEY).and_then(|raw| {
            let parsed = raw.trim().parse::<u32>().ok();
            if parsed.is_none() {
                warn!("ignoring corrupt best score {:?}", raw);
            }
            parsed
        });
        Self { value }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Text for the best-score display (`-` while unset)
    pub fn display(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => "-".to_string(),
        }
    }

    /// Whether `attempts` beats the current best
    pub fn improves(&self, attempts: u32) -> bool {
        self.value.map_or(true, |best| attempts < best)
    }

    /// Offer a finished round's attempt count
    ///
    /// Returns `Ok(true)` when the best improved and was stored. If storing
    /// fails the new value is still kept in memory and the error is returned.
    pub fn offer<S: Storage + ?Sized>(
        &mut self,
        store: &mut S,
        attempts: u32,
    ) -> Result<bool, PersistenceError> {
        if !self.improves(attempts) {
            return Ok(false);
        }
        self.value = Some(attempts);
        store
            .set(BEST_SCORE_KEY, &attempts.to_string())
            .map_err(|source| PersistenceError::Storage {
                key: BEST_SCORE_KEY,
                source,
            })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn unset_displays_dash() {
        let best = BestScore::load(&MemoryStorage::new());
        assert_eq!(best.value(), None);
        assert_eq!(best.display(), "-");
        assert!(best.improves(100));
    }

    #[test]
    fn only_strictly_lower_improves() {
        let mut store = MemoryStorage::new();
        let mut best = BestScore::default();
        assert_eq!(best.offer(&mut store, 4).unwrap(), true);
        assert_eq!(best.offer(&mut store, 4).unwrap(), false);
        assert_eq!(best.value(), Some(4));
        assert_eq!(store.get(BEST_SCORE_KEY).as_deref(), Some("4"));
    }

    #[test]
    fn corrupt_value_reads_unset() {
        let mut store = MemoryStorage::new();
        store.set(BEST_SCORE_KEY, "seven").unwrap();
        assert_eq!(BestScore::load(&store).value(), None);

        store.set(BEST_SCORE_KEY, " 6 ").unwrap();
        assert_eq!(BestScore::load(&store).value(), Some(6));
    }
}
