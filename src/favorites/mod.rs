//! Per-profile favorites
//!
//! Saved streams in insertion order. Removal is by URL identity, first
//! occurrence: the client names the stream it wants gone rather than a
//! position in whatever order it happened to render the list.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{AppError, AppResult, StoreError};
use crate::models::Favorite;
use crate::store::KeyValueStore;

const FAVORITES_KEY: &str = "favorites_v1";

#[derive(Clone)]
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Append a favorite. An absent title defaults to the URL.
    pub fn add(&self, username: &str, title: Option<&str>, url: &str) -> AppResult<Favorite> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::validation("favorite url is required"));
        }

        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => url.to_string(),
        };

        let favorite = Favorite {
            title,
            url: url.to_string(),
        };

        let mut all = self.load_all()?;
        all.entry(username.to_string())
            .or_default()
            .push(favorite.clone());
        self.save_all(&all)?;
        Ok(favorite)
    }

    /// The user's favorites in insertion order.
    pub fn list(&self, username: &str) -> AppResult<Vec<Favorite>> {
        let all = self.load_all()?;
        Ok(all.get(username).cloned().unwrap_or_default())
    }

    /// Remove the first stored favorite with the given URL.
    pub fn remove(&self, username: &str, url: &str) -> AppResult<()> {
        let mut all = self.load_all()?;
        let favorites = all.entry(username.to_string()).or_default();

        match favorites.iter().position(|f| f.url == url) {
            Some(index) => {
                favorites.remove(index);
                self.save_all(&all)?;
                Ok(())
            }
            None => Err(AppError::not_found("favorite", url)),
        }
    }

    fn load_all(&self) -> Result<HashMap<String, Vec<Favorite>>, StoreError> {
        match self.store.get(FAVORITES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(HashMap::new()),
        }
    }

    fn save_all(&self, all: &HashMap<String, Vec<Favorite>>) -> Result<(), StoreError> {
        self.store.set(FAVORITES_KEY, &serde_json::to_string(all)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> FavoritesService {
        FavoritesService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_and_list_keeps_insertion_order() {
        let favorites = service();
        favorites
            .add("alice", Some("News"), "http://example.com/news.m3u8")
            .unwrap();
        favorites
            .add("alice", Some("Sports"), "http://example.com/sports.m3u8")
            .unwrap();

        let list = favorites.list("alice").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "News");
        assert_eq!(list[1].title, "Sports");
    }

    #[test]
    fn test_title_defaults_to_url() {
        let favorites = service();
        let saved = favorites
            .add("alice", None, "http://example.com/a.m3u8")
            .unwrap();
        assert_eq!(saved.title, "http://example.com/a.m3u8");

        let blank = favorites
            .add("alice", Some("   "), "http://example.com/b.m3u8")
            .unwrap();
        assert_eq!(blank.title, "http://example.com/b.m3u8");
    }

    #[test]
    fn test_remove_first_occurrence_by_url() {
        let favorites = service();
        favorites
            .add("alice", Some("One"), "http://example.com/dup.m3u8")
            .unwrap();
        favorites
            .add("alice", Some("Two"), "http://example.com/dup.m3u8")
            .unwrap();

        favorites
            .remove("alice", "http://example.com/dup.m3u8")
            .unwrap();

        let list = favorites.list("alice").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Two");
    }

    #[test]
    fn test_remove_unknown_url_is_not_found() {
        let favorites = service();
        assert!(matches!(
            favorites.remove("alice", "http://example.com/none.m3u8"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let favorites = service();
        assert!(matches!(
            favorites.add("alice", Some("x"), "  "),
            Err(AppError::Validation { .. })
        ));
    }
}
