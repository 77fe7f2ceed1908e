use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::favorites::state;
use crate::session::WorkspaceSession;

/// Star toggle bound to one displayed (question, SQL) pair.
///
/// Visual state is derived from the favorites mirror, so it resyncs on
/// every reload. The button disables itself while its own toggle is in
/// flight; rapid repeated clicks cannot overlap.
#[component]
pub fn StarButton(question: String, sql: String) -> impl IntoView {
    let session =
        use_context::<WorkspaceSession>().expect("WorkspaceSession context not found");

    let busy = RwSignal::new(false);
    let question = StoredValue::new(question);
    let sql = StoredValue::new(sql);

    let starred = Signal::derive(move || question.with_value(|q| session.is_starred(q)));

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            if let Err(err) =
                state::toggle(session, question.get_value(), sql.get_value()).await
            {
                log::error!("failed to toggle favorite: {}", err);
            }
            busy.set(false);
        });
    };

    view! {
        <button
            class="star-button"
            class:starred=move || starred.get()
            title="Save as favorite"
            disabled=move || busy.get()
            on:click=on_click
        >
            {move || if starred.get() { "★" } else { "☆" }}
        </button>
    }
}
