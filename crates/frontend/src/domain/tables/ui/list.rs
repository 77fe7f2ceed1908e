//! Read-only registry of loaded tables, re-fetched in full after every
//! mutation (upload success, table removal).

use contracts::tables::TableSchema;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::upload::UploadModal;
use crate::domain::tables::api;
use crate::shared::icons::icon;
use crate::shared::notice::{flash, NoticeHost};

#[component]
pub fn TablesPanel() -> impl IntoView {
    let tables: RwSignal<Vec<TableSchema>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let notice: RwSignal<Option<String>> = RwSignal::new(None);
    let show_upload = RwSignal::new(false);
    let upload_error: RwSignal<Option<String>> = RwSignal::new(None);

    // Background refresh: failures keep the last snapshot and are logged,
    // never surfaced over unrelated user flows.
    let load_schema = move || {
        spawn_local(async move {
            match api::fetch_schema().await {
                Ok(schema) => {
                    if let Some(err) = schema.error {
                        log::error!("schema refresh rejected: {}", err);
                        return;
                    }
                    tables.set(schema.tables);
                }
                Err(err) => log::error!("failed to load schema: {}", err),
            }
        });
    };

    Effect::new(move |_| {
        load_schema();
    });

    // The one upload path. Browse, drag-drop and sample fetch all end up
    // here with a plain `File`.
    let handle_file_upload = move |file: web_sys::File| {
        upload_error.set(None);
        spawn_local(async move {
            match api::upload_file(&file).await {
                Ok(uploaded) => {
                    if let Some(err) = uploaded.error {
                        upload_error.set(Some(err));
                        return;
                    }
                    show_upload.set(false);
                    flash(
                        notice,
                        format!(
                            "Table \"{}\" created successfully with {} rows!",
                            uploaded.table_name, uploaded.row_count
                        ),
                    );
                    load_schema();
                }
                Err(err) => upload_error.set(Some(err)),
            }
        });
    };

    let remove_table = move |name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Are you sure you want to remove the table \"{}\"?",
                    name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match api::delete_table(&name).await {
                Ok(()) => {
                    flash(notice, format!("Table \"{}\" removed successfully!", name));
                    load_schema();
                }
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <section class="tables-section">
            <div class="tables-header">
                <h2 class="tables-header__title">{icon("database")} " Tables"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        upload_error.set(None);
                        show_upload.set(true);
                    }
                >
                    {icon("upload")}
                    " Upload data"
                </Button>
            </div>

            <NoticeHost notice=notice />
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            {move || if tables.with(|items| items.is_empty()) {
                view! {
                    <p class="tables-empty">
                        "No tables loaded. Upload data or use sample data to get started."
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <div class="tables-list">
                        <For
                            each=move || tables.get()
                            key=|table| table.name.clone()
                            children=move |table: TableSchema| {
                                view! {
                                    <TableCard
                                        table=table
                                        on_remove=Callback::new(remove_table)
                                    />
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }}

            {move || show_upload.get().then(|| view! {
                <UploadModal
                    on_file=Callback::new(handle_file_upload)
                    on_close=Callback::new(move |_| show_upload.set(false))
                    error=upload_error
                />
            })}
        </section>
    }
}

#[component]
fn TableCard(table: TableSchema, #[prop(into)] on_remove: Callback<String>) -> impl IntoView {
    let name = table.name.clone();
    let summary = format!("{} rows, {} columns", table.row_count, table.columns.len());

    view! {
        <div class="table-item">
            <div class="table-item__header">
                <div class="table-item__heading">
                    <span class="table-item__name">{table.name.clone()}</span>
                    <span class="table-item__info">{summary}</span>
                </div>
                <button
                    class="table-item__remove"
                    title="Remove table"
                    on:click=move |_| on_remove.run(name.clone())
                >
                    {icon("x")}
                </button>
            </div>
            <div class="table-item__columns">
                {table
                    .columns
                    .iter()
                    .map(|column| view! {
                        <span class="column-tag">
                            <span class="column-tag__name">{column.name.clone()}</span>
                            <span class="column-tag__type">
                                {format!("{} {}", type_glyph(&column.data_type), column.data_type)}
                            </span>
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Small marker per column type family, matched loosely against the
/// backend's SQL type names.
pub fn type_glyph(data_type: &str) -> &'static str {
    let upper = data_type.to_uppercase();
    if upper.contains("INT") {
        return "🔢";
    }
    if upper.contains("REAL") || upper.contains("FLOAT") || upper.contains("DOUBLE") {
        return "💯";
    }
    if upper.contains("TEXT") || upper.contains("CHAR") || upper.contains("STRING") {
        return "📝";
    }
    if upper.contains("DATE") || upper.contains("TIME") {
        return "📅";
    }
    if upper.contains("BOOL") {
        return "✓";
    }
    if upper.contains("BLOB") {
        return "📦";
    }
    "📊"
}

#[cfg(test)]
mod tests {
    use super::type_glyph;

    #[test]
    fn matches_type_families_case_insensitively() {
        assert_eq!(type_glyph("INTEGER"), "🔢");
        assert_eq!(type_glyph("bigint"), "🔢");
        assert_eq!(type_glyph("VARCHAR(20)"), "📝");
        assert_eq!(type_glyph("timestamp"), "📅");
        assert_eq!(type_glyph("BOOLEAN"), "✓");
    }

    #[test]
    fn unknown_types_get_the_generic_marker() {
        assert_eq!(type_glyph("GEOMETRY"), "📊");
    }
}
