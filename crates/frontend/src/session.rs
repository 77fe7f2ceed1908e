//! Page-lifetime session state shared by the orchestration components.
//!
//! Holds the favorites mirror and the text of the most recently executed
//! query. Both are plain signals mutated only from main-thread event
//! handlers; the star toggle derives its visual state from them.

use contracts::favorites::FavoriteItem;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct WorkspaceSession {
    /// Client-held mirror of the server's favorites list, replaced
    /// wholesale on every successful reload.
    pub favorites: RwSignal<Vec<FavoriteItem>>,
    /// Text of the most recently executed query.
    pub current_query: RwSignal<String>,
}

impl WorkspaceSession {
    pub fn new() -> Self {
        Self {
            favorites: RwSignal::new(Vec::new()),
            current_query: RwSignal::new(String::new()),
        }
    }

    pub fn replace_favorites(&self, items: Vec<FavoriteItem>) {
        self.favorites.set(items);
    }

    pub fn set_current_query(&self, query: &str) {
        self.current_query.set(query.to_string());
    }

    /// Reactive: re-evaluates whenever the favorites mirror changes.
    pub fn is_starred(&self, query_text: &str) -> bool {
        self.favorites.with(|items| is_starred(items, query_text))
    }
}

impl Default for WorkspaceSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_starred(items: &[FavoriteItem], query_text: &str) -> bool {
    items.iter().any(|item| item.query_text == query_text)
}

pub fn find_favorite(items: &[FavoriteItem], query_text: &str) -> Option<i64> {
    items
        .iter()
        .find(|item| item.query_text == query_text)
        .map(|item| item.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: i64, query_text: &str) -> FavoriteItem {
        FavoriteItem {
            id,
            query_text: query_text.to_string(),
            sql_text: "SELECT 1".to_string(),
            created_at: "2024-03-15T14:02:26+00:00".to_string(),
        }
    }

    #[test]
    fn starred_requires_exact_query_text_match() {
        let items = vec![favorite(1, "Show me all users")];
        assert!(is_starred(&items, "Show me all users"));
        assert!(!is_starred(&items, "show me all users"));
        assert!(!is_starred(&items, "Show me all users "));
    }

    #[test]
    fn find_favorite_returns_server_id() {
        let items = vec![favorite(7, "Top products"), favorite(9, "Daily events")];
        assert_eq!(find_favorite(&items, "Daily events"), Some(9));
        assert_eq!(find_favorite(&items, "Weekly events"), None);
    }
}
