//! Summary-builder panel: four-field report form and the summarize flow.
//!
//! Validation runs locally first; a draft with blank fields never reaches
//! the backend. The result box autosizes whenever the summary text is set.

use leptos::prelude::*;

use crate::state::summary::SummaryState;

/// Summary builder form with an inline error element and result box.
#[component]
pub fn SummaryBuilder() -> impl IntoView {
    let summary = expect_context::<RwSignal<SummaryState>>();
    let config = expect_context::<crate::app::AppConfig>();

    let result_ref = NodeRef::<leptos::html::Textarea>::new();

    // Refit the result box whenever its value is set programmatically.
    Effect::new(move || {
        let _ = summary.get().result;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = result_ref.get() {
                crate::util::autosize::fit(&el);
            }
        }
    });

    let on_submit = move |_| {
        if summary.get().loading {
            return;
        }
        let draft = summary.get().draft.clone();
        if let Some(message) = draft.validation_message() {
            summary.update(|s| {
                s.error = message;
                s.result.clear();
            });
            return;
        }
        summary.update(|s| {
            s.error.clear();
            s.result.clear();
            s.loading = true;
        });

        #[cfg(feature = "hydrate")]
        {
            let api_base = config.api_base.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::summarize(&api_base, &draft).await {
                    Ok(text) => summary.update(|s| {
                        s.loading = false;
                        s.result = text;
                    }),
                    Err(err) => summary.update(|s| {
                        s.loading = false;
                        s.error = err.user_message();
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    };

    let field = move |label: &'static str,
                      value: fn(&SummaryState) -> String,
                      set: fn(&mut SummaryState, String)| {
        view! {
            <label class="form__label">
                {label}
                <textarea
                    class="form__field"
                    rows="1"
                    prop:value=move || value(&summary.get())
                    on:input=move |ev| {
                        summary.update(|s| set(s, event_target_value(&ev)));
                        #[cfg(feature = "hydrate")]
                        crate::util::autosize::fit_target(&ev);
                    }
                ></textarea>
            </label>
        }
    };

    view! {
        <section class="form-panel form-panel--summary">
            <h2 class="form-panel__title">"Summary Builder"</h2>

            {field("Problem Statement", |s| s.draft.problem.clone(), |s, v| s.draft.problem = v)}
            {field("Impact of Problem", |s| s.draft.impact.clone(), |s, v| s.draft.impact = v)}
            {field("Root Cause", |s| s.draft.root_cause.clone(), |s, v| s.draft.root_cause = v)}
            {field("Fix of Problem", |s| s.draft.fix.clone(), |s, v| s.draft.fix = v)}

            <div class="form-panel__actions">
                <button
                    class="btn btn--primary"
                    on:click=on_submit
                    disabled=move || summary.get().loading
                >
                    "Submit"
                </button>
                {move || {
                    summary.get()
                        .loading
                        .then(|| view! { <div class="form-panel__loading">"Summarizing..."</div> })
                }}
            </div>

            <Show when=move || !summary.get().error.is_empty()>
                <p class="form-panel__error">{move || summary.get().error}</p>
            </Show>

            <label class="form__label">
                "Summarized Output"
                <textarea
                    class="form__field form__field--result"
                    rows="1"
                    readonly=true
                    node_ref=result_ref
                    prop:value=move || summary.get().result
                ></textarea>
            </label>
        </section>
    }
}
