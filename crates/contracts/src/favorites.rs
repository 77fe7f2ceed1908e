use serde::{Deserialize, Serialize};

/// A starred question together with the SQL it resolved to.
///
/// `id` is assigned by the server; `created_at` is the server's RFC 3339
/// timestamp, kept as a string and formatted only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: i64,
    pub query_text: String,
    pub sql_text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFavorite {
    pub query_text: String,
    pub sql_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritesResponse {
    #[serde(default)]
    pub favorites: Vec<FavoriteItem>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorites_payload_round_trips() {
        let raw = r#"{"favorites": [{"id": 3, "query_text": "Show me all users",
            "sql_text": "SELECT * FROM users", "created_at": "2024-03-15T14:02:26+00:00"}]}"#;
        let response: FavoritesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.favorites.len(), 1);
        assert_eq!(response.favorites[0].id, 3);
        assert_eq!(response.favorites[0].query_text, "Show me all users");
    }
}
