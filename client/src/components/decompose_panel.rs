//! Decomposer panel: one summarized-text input fanned back out into the
//! four report fields.

use leptos::prelude::*;

use crate::state::summary::{DecomposeState, EMPTY_DECOMPOSE_ERROR, SummaryDraft};

/// Decompose form with an inline error element and four output boxes.
#[component]
pub fn DecomposePanel() -> impl IntoView {
    let decompose = expect_context::<RwSignal<DecomposeState>>();
    let config = expect_context::<crate::app::AppConfig>();

    let problem_ref = NodeRef::<leptos::html::Textarea>::new();
    let impact_ref = NodeRef::<leptos::html::Textarea>::new();
    let root_ref = NodeRef::<leptos::html::Textarea>::new();
    let fix_ref = NodeRef::<leptos::html::Textarea>::new();

    // Refit every output box when the fields are cleared or filled.
    Effect::new(move || {
        let _ = decompose.get().fields;

        #[cfg(feature = "hydrate")]
        {
            for node in [problem_ref, impact_ref, root_ref, fix_ref] {
                if let Some(el) = node.get() {
                    crate::util::autosize::fit(&el);
                }
            }
        }
    });

    let on_decompose = move |_| {
        if decompose.get().loading {
            return;
        }
        let text = decompose.get().input.trim().to_owned();
        decompose.update(|d| d.error.clear());
        if text.is_empty() {
            decompose.update(|d| d.error = EMPTY_DECOMPOSE_ERROR.to_owned());
            return;
        }
        decompose.update(|d| {
            d.fields = SummaryDraft::default();
            d.loading = true;
        });

        #[cfg(feature = "hydrate")]
        {
            let api_base = config.api_base.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::decompose(&api_base, &text).await {
                    Ok(fields) => decompose.update(|d| {
                        d.loading = false;
                        d.fields = SummaryDraft {
                            problem: fields.problem,
                            impact: fields.impact,
                            root_cause: fields.root_cause,
                            fix: fields.fix,
                        };
                    }),
                    Err(err) => decompose.update(|d| {
                        d.loading = false;
                        d.error = err.user_message();
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    };

    let output = move |label: &'static str,
                       node: NodeRef<leptos::html::Textarea>,
                       value: fn(&SummaryDraft) -> String| {
        view! {
            <label class="form__label">
                {label}
                <textarea
                    class="form__field form__field--result"
                    rows="1"
                    readonly=true
                    node_ref=node
                    prop:value=move || value(&decompose.get().fields)
                ></textarea>
            </label>
        }
    };

    view! {
        <section class="form-panel form-panel--decompose">
            <h2 class="form-panel__title">"Summary Decomposer"</h2>

            <label class="form__label">
                "Summarized Output"
                <textarea
                    class="form__field"
                    rows="1"
                    placeholder="Paste the summarized output here..."
                    prop:value=move || decompose.get().input
                    on:input=move |ev| {
                        decompose.update(|d| d.input = event_target_value(&ev));
                        #[cfg(feature = "hydrate")]
                        crate::util::autosize::fit_target(&ev);
                    }
                ></textarea>
            </label>

            <div class="form-panel__actions">
                <button
                    class="btn btn--primary"
                    on:click=on_decompose
                    disabled=move || decompose.get().loading
                >
                    "Decompose"
                </button>
                {move || {
                    decompose.get()
                        .loading
                        .then(|| view! { <div class="form-panel__loading">"Decomposing..."</div> })
                }}
            </div>

            <Show when=move || !decompose.get().error.is_empty()>
                <p class="form-panel__error">{move || decompose.get().error}</p>
            </Show>

            {output("Problem Statement", problem_ref, |f| f.problem.clone())}
            {output("Impact of Problem", impact_ref, |f| f.impact.clone())}
            {output("Root Cause", root_ref, |f| f.root_cause.clone())}
            {output("Fix of Problem", fix_ref, |f| f.fix.clone())}
        </section>
    }
}
