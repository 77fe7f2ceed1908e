//! Root layout of the workspace: header, query section, table registry and
//! the favorites slide-over.

use crate::domain::favorites::{state, ui::FavoritesPanel};
use crate::domain::queries::ui::QuerySection;
use crate::domain::tables::ui::TablesPanel;
use crate::session::WorkspaceSession;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn WorkspaceShell() -> impl IntoView {
    let session =
        use_context::<WorkspaceSession>().expect("WorkspaceSession context not found");

    let favorites_open = RwSignal::new(false);
    // Question queued for re-execution from the favorites panel. The query
    // section drains it through the same submission path as the button.
    let replay = RwSignal::new(Option::<String>::None);

    // Initial favorites mirror. A failure here only loses star state until
    // the next reload, so it is logged and not surfaced.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(err) = state::reload(session).await {
                log::error!("failed to load favorites: {}", err);
            }
        });
    });

    view! {
        <div class="workspace">
            <header class="workspace__header">
                <h1 class="workspace__title">"Query Workbench"</h1>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| favorites_open.set(true)
                >
                    "★ Favorites"
                </Button>
            </header>

            <main class="workspace__content">
                <QuerySection replay=replay />
                <TablesPanel />
            </main>

            <FavoritesPanel
                open=favorites_open
                on_replay=Callback::new(move |question: String| replay.set(Some(question)))
            />
        </div>
    }
}
