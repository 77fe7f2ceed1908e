use contracts::favorites::FavoriteItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::favorites::state;
use crate::session::WorkspaceSession;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;

/// Slide-over listing saved favorites. Opening it resyncs the mirror;
/// clicking an item replays the saved question through the regular
/// submission path.
#[component]
pub fn FavoritesPanel(
    open: RwSignal<bool>,
    #[prop(into)] on_replay: Callback<String>,
) -> impl IntoView {
    let session =
        use_context::<WorkspaceSession>().expect("WorkspaceSession context not found");

    // Refresh on every open. A panel that cannot load just shows the last
    // mirror; the failure is logged, not surfaced.
    Effect::new(move |_| {
        if open.get() {
            spawn_local(async move {
                if let Err(err) = state::reload(session).await {
                    log::error!("failed to load favorites: {}", err);
                }
            });
        }
    });

    view! {
        {move || open.get().then(|| view! {
            <div class="favorites-overlay" on:click=move |_| open.set(false)></div>
        })}
        <aside class="favorites-panel" class:open=move || open.get()>
            <div class="favorites-panel__header">
                <h2 class="favorites-panel__title">"Favorites"</h2>
                <button class="button button--icon" on:click=move |_| open.set(false)>
                    {icon("x")}
                </button>
            </div>
            <div class="favorites-panel__list">
                {move || if session.favorites.with(|items| items.is_empty()) {
                    view! {
                        <p class="favorites-panel__empty">
                            "No favorites saved yet. Run a query and click the star to save it."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <For
                            each=move || session.favorites.get()
                            key=|item| item.id
                            children=move |item: FavoriteItem| {
                                view! {
                                    <FavoriteCard
                                        item=item
                                        on_select=Callback::new(move |question: String| {
                                            open.set(false);
                                            on_replay.run(question);
                                        })
                                    />
                                }
                            }
                        />
                    }
                    .into_any()
                }}
            </div>
        </aside>
    }
}

#[component]
fn FavoriteCard(
    item: FavoriteItem,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let session =
        use_context::<WorkspaceSession>().expect("WorkspaceSession context not found");

    let id = item.id;
    let select_text = item.query_text.clone();
    let saved_at = format_timestamp(&item.created_at);

    // Marks the favorite matching the query currently on screen.
    let is_current = {
        let text = item.query_text.clone();
        move || session.current_query.with(|current| *current == text)
    };

    let remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        spawn_local(async move {
            if let Err(err) = state::remove(session, id).await {
                log::error!("failed to delete favorite: {}", err);
            }
        });
    };

    view! {
        <div
            class="favorite-item"
            class=("favorite-item--current", is_current)
            on:click=move |_| on_select.run(select_text.clone())
        >
            <div class="favorite-item__query">{item.query_text.clone()}</div>
            <div class="favorite-item__sql">{item.sql_text.clone()}</div>
            <div class="favorite-item__footer">
                <span class="favorite-item__date">{saved_at}</span>
                <button class="favorite-item__remove" on:click=remove>
                    "Remove"
                </button>
            </div>
        </div>
    }
}
