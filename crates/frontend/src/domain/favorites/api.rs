use contracts::favorites::{FavoriteItem, FavoritesResponse, NewFavorite};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the full favorites list
pub async fn fetch_favorites() -> Result<FavoritesResponse, String> {
    let response = Request::get(&api_url("/api/favorites"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch favorites: {}", response.status()));
    }

    response
        .json::<FavoritesResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Save a query/SQL pair as a favorite
pub async fn add_favorite(favorite: &NewFavorite) -> Result<FavoriteItem, String> {
    let response = Request::post(&api_url("/api/favorites"))
        .json(favorite)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to add favorite: {}", response.status()));
    }

    response
        .json::<FavoriteItem>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a favorite by its server id
pub async fn delete_favorite(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/favorites/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete favorite: {}", response.status()));
    }

    Ok(())
}
