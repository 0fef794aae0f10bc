//! Best score persistence
//!
//! The session reads the best score once when it is created and writes it
//! whenever a run ends with a new best. Where it lives is up to the host:
//! - `MemoryStore`: process-local (native builds, tests)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//!
//! A store that cannot produce a value reports 0.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Storage collaborator for the best score
pub trait BestScoreStore {
    fn load_best_score(&self) -> u32;
    fn save_best_score(&mut self, score: u32);
}

/// Stored form of the best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub score: u32,
}

impl BestScoreRecord {
    /// Parse a stored record, treating anything unreadable as no record
    pub fn parse(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Ignoring unreadable best score record: {}", e);
                None
            }
        }
    }
}

/// In-memory store. Clones share the same slot, so a test can keep a handle
/// while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Rc<Cell<u32>>,
    saves: Rc<Cell<u32>>,
}

impl MemoryStore {
    pub fn with_best(score: u32) -> Self {
        let store = Self::default();
        store.best.set(score);
        store
    }

    /// Number of writes so far
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&self) -> u32 {
        self.best.get()
    }

    fn save_best_score(&mut self, score: u32) {
        self.best.set(score);
        self.saves.set(self.saves.get() + 1);
    }
}

/// Browser LocalStorage store (wasm32 only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "kipp_flap_best_score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageStore {
    fn load_best_score(&self) -> u32 {
        let stored = Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|json| BestScoreRecord::parse(&json));

        match stored {
            Some(record) => {
                log::info!("Loaded best score {}", record.score);
                record.score
            }
            None => {
                log::info!("No best score found, starting fresh");
                0
            }
        }
    }

    fn save_best_score(&mut self, score: u32) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, best score not saved");
            return;
        };
        match serde_json::to_string(&BestScoreRecord { score }) {
            Ok(json) => {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to write best score");
                } else {
                    log::info!("Best score saved ({})", score);
                }
            }
            Err(e) => log::warn!("Failed to encode best score: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_slot() {
        let handle = MemoryStore::with_best(3);
        let mut owned = handle.clone();
        owned.save_best_score(8);
        assert_eq!(handle.load_best_score(), 8);
        assert_eq!(handle.save_count(), 1);
    }

    #[test]
    fn test_empty_store_reports_zero() {
        assert_eq!(MemoryStore::default().load_best_score(), 0);
    }

    #[test]
    fn test_record_parse() {
        assert_eq!(
            BestScoreRecord::parse(r#"{"score":12}"#),
            Some(BestScoreRecord { score: 12 })
        );
        assert_eq!(BestScoreRecord::parse("not json"), None);
        assert_eq!(BestScoreRecord::parse(r#"{"score":-1}"#), None);
    }
}
