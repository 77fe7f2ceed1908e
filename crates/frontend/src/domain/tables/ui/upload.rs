use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::domain::tables::{api, samples};
use crate::shared::icons::icon;

/// Upload dialog. Browse, drag-drop and the sample-dataset buttons are
/// three adapters over the same `on_file` callback; upload errors render
/// inside the dialog and leave it open.
#[component]
pub fn UploadModal(
    #[prop(into)] on_file: Callback<web_sys::File>,
    #[prop(into)] on_close: Callback<()>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let dragging = RwSignal::new(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    // Escape closes the dialog
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                if key_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let browse = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_picked = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    on_file.run(file);
                }
            }
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        if let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) {
            if let Some(file) = files.get(0) {
                on_file.run(file);
            }
        }
    };

    let load_sample = move |dataset: &'static str| {
        error.set(None);
        spawn_local(async move {
            match samples::sample_filename(dataset) {
                Ok(filename) => match api::fetch_sample(filename).await {
                    Ok(file) => on_file.run(file),
                    Err(err) => error.set(Some(err)),
                },
                Err(err) => error.set(Some(err)),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Upload data"</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                    <div
                        class="drop-zone"
                        class:dragover=move || dragging.get()
                        on:dragover=move |ev| {
                            ev.prevent_default();
                            dragging.set(true);
                        }
                        on:dragleave=move |_| dragging.set(false)
                        on:drop=on_drop
                    >
                        <p>"Drag a CSV, JSON or JSONL file here, or"</p>
                        <Button appearance=ButtonAppearance::Secondary on_click=browse>
                            "Browse files"
                        </Button>
                        <input
                            type="file"
                            accept=".csv,.json,.jsonl"
                            style="display: none;"
                            node_ref=file_input
                            on:change=on_picked
                        />
                    </div>

                    <div class="sample-data">
                        <h3 class="sample-data__title">"Or start from a sample dataset"</h3>
                        <Flex gap=FlexGap::Small>
                            {samples::SAMPLE_DATASETS
                                .iter()
                                .map(|(dataset, label)| {
                                    let dataset = *dataset;
                                    view! {
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| load_sample(dataset)
                                        >
                                            {*label}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </Flex>
                    </div>
                </div>
            </div>
        </div>
    }
}
