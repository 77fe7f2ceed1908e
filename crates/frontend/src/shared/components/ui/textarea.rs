use leptos::prelude::*;

/// Controlled textarea with optional keydown handling
#[component]
pub fn Textarea(
    /// Bound value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Rows attribute
    #[prop(default = 3)]
    rows: u32,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Keydown handler (e.g. submit shortcuts)
    #[prop(optional)]
    on_keydown: Option<Callback<web_sys::KeyboardEvent>>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=textarea_placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if let Some(handler) = on_keydown {
                        handler.run(ev);
                    }
                }
            ></textarea>
        </div>
    }
}
