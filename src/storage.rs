//! Saved-name persistence
//!
//! A small JSON-file store for the user's saved names. Entries are keyed by
//! case-insensitive name and ordered most-recently-saved first; saving an
//! already-saved name removes it (toggle semantics).

use crate::error::{NexirError, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name, versioned so the format can change later.
pub const SAVED_FILE_NAME: &str = "nexir_saved_names_v1.json";

/// A saved name entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedName {
    pub name: String,
    pub tagline: String,
    pub why: String,
    pub saved_at: DateTime<Utc>,
}

/// File-backed saved-name store, safe to share across tasks
pub struct SavedStore {
    path: PathBuf,
    items: RwLock<Vec<SavedName>>,
}

impl SavedStore {
    /// Open a store at the given path.
    ///
    /// A missing file starts the store empty; so does a corrupt one, since
    /// the saved list is a convenience and not worth failing startup over.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = Self::read_items(&path);
        Self {
            path,
            items: RwLock::new(items),
        }
    }

    fn read_items(path: &Path) -> Vec<SavedName> {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Saved-name file is corrupt, starting empty");
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    /// All saved entries, most recently saved first.
    pub fn list(&self) -> Vec<SavedName> {
        self.items.read().clone()
    }

    /// Whether a name is currently saved (case-insensitive).
    pub fn is_saved(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.items
            .read()
            .iter()
            .any(|x| x.name.to_lowercase() == needle)
    }

    /// Toggle a name: remove it if saved, otherwise insert at the front.
    /// Returns the resulting list and persists it.
    pub fn toggle(&self, name: &str, tagline: &str, why: &str) -> Result<Vec<SavedName>> {
        let needle = name.to_lowercase();
        let next = {
            let mut items = self.items.write();
            if items.iter().any(|x| x.name.to_lowercase() == needle) {
                items.retain(|x| x.name.to_lowercase() != needle);
            } else {
                items.insert(
                    0,
                    SavedName {
                        name: name.to_string(),
                        tagline: tagline.to_string(),
                        why: why.to_string(),
                        saved_at: Utc::now(),
                    },
                );
            }
            items.clone()
        };

        self.persist(&next)?;
        Ok(next)
    }

    /// Remove a saved name. No-op when it is not saved.
    pub fn remove(&self, name: &str) -> Result<Vec<SavedName>> {
        let needle = name.to_lowercase();
        let next = {
            let mut items = self.items.write();
            items.retain(|x| x.name.to_lowercase() != needle);
            items.clone()
        };

        self.persist(&next)?;
        Ok(next)
    }

    fn persist(&self, items: &[SavedName]) -> Result<()> {
        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, raw).map_err(|e| {
            NexirError::io(e.to_string(), Some(self.path.display().to_string()))
        })
    }
}

/// Resolve the default store location: `$NEXIR_HOME`, then `$HOME`, then
/// the current directory.
pub fn default_store_path() -> PathBuf {
    let base = std::env::var("NEXIR_HOME")
        .or_else(|_| std::env::var("HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join(SAVED_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SavedStore {
        SavedStore::open(dir.path().join(SAVED_FILE_NAME))
    }

    #[test]
    fn test_toggle_saves_then_removes() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let after_save = store.toggle("Zeno", "Calm focus daily", "Short and calm").unwrap();
        assert_eq!(after_save.len(), 1);
        assert!(store.is_saved("zeno"));

        // Case-insensitive toggle removes the existing entry
        let after_unsave = store.toggle("ZENO", "", "").unwrap();
        assert!(after_unsave.is_empty());
        assert!(!store.is_saved("Zeno"));
    }

    #[test]
    fn test_most_recent_first() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.toggle("First", "t", "w").unwrap();
        store.toggle("Second", "t", "w").unwrap();

        let names: Vec<String> = store.list().into_iter().map(|x| x.name).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SAVED_FILE_NAME);

        {
            let store = SavedStore::open(&path);
            store.toggle("Brio", "Energy in motion", "Lively sound").unwrap();
        }

        let reopened = SavedStore::open(&path);
        let items = reopened.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Brio");
        assert_eq!(items[0].tagline, "Energy in motion");
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SAVED_FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        let store = SavedStore::open(&path);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.toggle("Zeno", "t", "w").unwrap();
        let after = store.remove("missing").unwrap();
        assert_eq!(after.len(), 1);
    }
}
