//! Per-profile viewing history
//!
//! A plain log of what a profile watched, newest first. Entries are only
//! ever prepended or cleared wholesale; there is no per-entry deletion.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::errors::{AppResult, StoreError};
use crate::models::HistoryEntry;
use crate::store::KeyValueStore;

const HISTORY_KEY: &str = "history_v1";

#[derive(Clone)]
pub struct HistoryService {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Prepend an entry to the user's log and return it.
    pub fn add(&self, username: &str, title: &str, note: &str) -> AppResult<HistoryEntry> {
        let entry = HistoryEntry {
            title: title.to_string(),
            note: note.to_string(),
            date: Utc::now(),
        };

        let mut all = self.load_all()?;
        all.entry(username.to_string())
            .or_default()
            .insert(0, entry.clone());
        self.save_all(&all)?;
        Ok(entry)
    }

    /// The user's log, newest first.
    pub fn list(&self, username: &str) -> AppResult<Vec<HistoryEntry>> {
        let all = self.load_all()?;
        Ok(all.get(username).cloned().unwrap_or_default())
    }

    /// Empty the user's log, leaving other profiles untouched.
    pub fn clear(&self, username: &str) -> AppResult<()> {
        let mut all = self.load_all()?;
        all.insert(username.to_string(), Vec::new());
        self.save_all(&all)?;
        Ok(())
    }

    fn load_all(&self) -> Result<HashMap<String, Vec<HistoryEntry>>, StoreError> {
        match self.store.get(HISTORY_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(HashMap::new()),
        }
    }

    fn save_all(&self, all: &HashMap<String, Vec<HistoryEntry>>) -> Result<(), StoreError> {
        self.store.set(HISTORY_KEY, &serde_json::to_string(all)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> HistoryService {
        HistoryService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let history = service();
        history.add("alice", "First", "").unwrap();
        history.add("alice", "Second", "a note").unwrap();

        let entries = history.list("alice").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Second");
        assert_eq!(entries[0].note, "a note");
        assert_eq!(entries[1].title, "First");
    }

    #[test]
    fn test_list_unknown_user_is_empty() {
        assert!(service().list("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_clear_only_touches_one_profile() {
        let history = service();
        history.add("alice", "Hers", "").unwrap();
        history.add("bob", "His", "").unwrap();

        history.clear("alice").unwrap();
        assert!(history.list("alice").unwrap().is_empty());
        assert_eq!(history.list("bob").unwrap().len(), 1);
    }
}
