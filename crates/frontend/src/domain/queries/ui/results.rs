use contracts::queries::QueryResponse;
use leptos::prelude::*;
use thaw::*;

use crate::domain::favorites::ui::StarButton;
use crate::shared::components::result_table::ResultTable;

/// One answered submission: question, generated SQL and the result table
/// (or the embedded translation/execution error).
#[component]
pub fn ResultsPanel(question: String, response: QueryResponse) -> impl IntoView {
    let visible = RwSignal::new(true);

    let star_question = question.clone();
    let star_sql = response.sql.clone();
    let sql = response.sql.clone();

    let body = {
        let response = response.clone();
        move || {
            visible.get().then(|| {
                if let Some(err) = response.error.clone() {
                    view! { <div class="alert alert--error">{err}</div> }.into_any()
                } else {
                    view! {
                        <ResultTable
                            columns=response.columns.clone()
                            rows=response.rows.clone()
                        />
                    }
                    .into_any()
                }
            })
        }
    };

    view! {
        <section class="results-section">
            <div class="results-header">
                <h2 class="results-header__title">"Results"</h2>
                <StarButton question=star_question sql=star_sql />
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </Button>
            </div>
            <div class="results-summary">
                <div class="results-summary__question">
                    <strong>"Query: "</strong>
                    {question.clone()}
                </div>
                <div class="results-summary__sql">
                    <strong>"SQL: "</strong>
                    <code>{sql}</code>
                </div>
            </div>
            <div class="results-body">{body}</div>
        </section>
    }
}
