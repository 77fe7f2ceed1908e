//! Favorites cache orchestration.
//!
//! The session mirror is the single source of truth for star state. Every
//! mutation goes add/delete-then-reload rather than patching the mirror in
//! place, so server-assigned ids never drift. The reload completes before
//! the mirror is replaced, which in turn is what re-renders any star
//! toggle derived from it.

use leptos::prelude::WithUntracked;

use contracts::favorites::NewFavorite;

use crate::domain::favorites::api;
use crate::session::{find_favorite, WorkspaceSession};

/// Replace the session mirror with the server's current list.
pub async fn reload(session: WorkspaceSession) -> Result<(), String> {
    let response = api::fetch_favorites().await?;
    if let Some(err) = response.error {
        return Err(err);
    }
    session.replace_favorites(response.favorites);
    Ok(())
}

/// Delete one favorite, then resync the mirror.
pub async fn remove(session: WorkspaceSession, id: i64) -> Result<(), String> {
    api::delete_favorite(id).await?;
    reload(session).await
}

/// Star or unstar one query by exact `query_text` match.
///
/// Callers must not overlap toggles for the same query text; the star
/// button enforces this by disabling itself while its toggle is in
/// flight, which keeps the at-most-one-favorite-per-query invariant.
pub async fn toggle(
    session: WorkspaceSession,
    query_text: String,
    sql_text: String,
) -> Result<(), String> {
    let existing = session
        .favorites
        .with_untracked(|items| find_favorite(items, &query_text));

    match existing {
        Some(id) => remove(session, id).await,
        None => {
            api::add_favorite(&NewFavorite {
                query_text,
                sql_text,
            })
            .await?;
            reload(session).await
        }
    }
}
