//! Query submission orchestration: one state machine per submission,
//! `Idle -> Submitting -> {Succeeded, Failed} -> Idle`.

mod results;

use contracts::queries::{LlmProvider, QueryRequest, QueryResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::queries::api;
use crate::session::WorkspaceSession;
use crate::shared::components::ui::Textarea;
use results::ResultsPanel;

/// Terminal state of the last submission (or of a failed generation).
#[derive(Clone)]
enum QueryOutcome {
    Answered {
        question: String,
        response: QueryResponse,
    },
    Failed(String),
}

#[component]
pub fn QuerySection(
    /// Question queued for replay from the favorites panel; drained into
    /// the regular submission path.
    replay: RwSignal<Option<String>>,
) -> impl IntoView {
    let session =
        use_context::<WorkspaceSession>().expect("WorkspaceSession context not found");

    let input = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (generating, set_generating) = signal(false);
    let outcome: RwSignal<Option<QueryOutcome>> = RwSignal::new(None);

    // Single submission path for button, keyboard shortcut and replay.
    // A second trigger while a request is in flight is a no-op; nothing
    // is queued or cancelled.
    let run_query = move |question: String| {
        let question = question.trim().to_string();
        if question.is_empty() {
            return;
        }
        if submitting.get_untracked() {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let request = QueryRequest {
                query: question.clone(),
                llm_provider: LlmProvider::default(),
            };
            match api::process_query(&request).await {
                Ok(response) => {
                    session.set_current_query(&question);
                    outcome.set(Some(QueryOutcome::Answered { question, response }));
                    // Only a delivered response clears the input; transport
                    // failures keep it so the user can retry without retyping.
                    input.set(String::new());
                }
                Err(err) => {
                    outcome.set(Some(QueryOutcome::Failed(err)));
                }
            }
            set_submitting.set(false);
        });
    };

    Effect::new(move |_| {
        if let Some(question) = replay.get() {
            replay.set(None);
            input.set(question.clone());
            run_query(question);
        }
    });

    let generate = move |_| {
        if generating.get_untracked() {
            return;
        }
        set_generating.set(true);
        spawn_local(async move {
            match api::generate_query().await {
                Ok(generated) => match (generated.query, generated.error) {
                    (_, Some(err)) => outcome.set(Some(QueryOutcome::Failed(err))),
                    (Some(question), None) => input.set(question),
                    (None, None) => outcome.set(Some(QueryOutcome::Failed(
                        "No query was generated. Please try again.".to_string(),
                    ))),
                },
                Err(err) => outcome.set(Some(QueryOutcome::Failed(err))),
            }
            set_generating.set(false);
        });
    };

    view! {
        <section class="query-section">
            <h2 class="query-section__title">"Ask a question"</h2>
            <Textarea
                id="query-input"
                value=input
                rows=3
                placeholder="Ask a question about your data..."
                on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                    if (ev.meta_key() || ev.ctrl_key()) && ev.key() == "Enter" {
                        run_query(input.get_untracked());
                    }
                })
            />
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| run_query(input.get_untracked())
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Running..." } else { "Query" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=generate
                    disabled=Signal::derive(move || generating.get())
                >
                    {move || if generating.get() { "Generating..." } else { "Generate query" }}
                </Button>
            </Flex>

            {move || outcome.get().map(|last| match last {
                QueryOutcome::Answered { question, response } => view! {
                    <ResultsPanel question=question response=response />
                }
                .into_any(),
                QueryOutcome::Failed(message) => view! {
                    <section class="results-section">
                        <div class="alert alert--error">{message}</div>
                    </section>
                }
                .into_any(),
            })}
        </section>
    }
}
