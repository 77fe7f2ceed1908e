//! Transient success notices, auto-dismissed after a fixed interval.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_TTL_MS: u32 = 3_000;

/// Show `message` in the given notice slot and clear it after the TTL.
/// Last write wins if a second notice lands before the first expires.
pub fn flash(notice: RwSignal<Option<String>>, message: String) {
    notice.set(Some(message));
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        notice.set(None);
    });
}

#[component]
pub fn NoticeHost(notice: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|message| view! {
            <div class="notice notice--success">{message}</div>
        })}
    }
}
