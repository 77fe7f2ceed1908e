use crate::app_shell::WorkspaceShell;
use crate::session::WorkspaceSession;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One session object for the whole page lifetime, available via context.
    provide_context(WorkspaceSession::new());

    view! {
        <WorkspaceShell />
    }
}
