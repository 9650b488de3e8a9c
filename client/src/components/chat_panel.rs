//! Chat panel: transcript, loading indicator, and the send flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the optimize exchange: validates input, rebuilds the transcript,
//! calls the backend, and reveals the formatted reply after the configured
//! delay. The loading flag doubles as the navigation soft lock.

use leptos::prelude::*;

use crate::state::chat::{ChatState, NO_CODE_ERROR, Role};
use crate::state::ui::UiState;
use crate::util::format::format_reply;

/// Chat panel with transcript and an autosizing input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<crate::app::AppConfig>();

    let history_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // Keep the transcript scrolled to the newest entry.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = history_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Refit the input whenever its value changes, including the programmatic
    // clear after a send.
    Effect::new(move || {
        let _ = chat.get().input;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                crate::util::autosize::fit(&el);
            }
        }
    });

    let do_send = move || {
        if chat.get().loading {
            return;
        }
        let code = chat.get().input.trim().to_owned();
        if code.is_empty() {
            chat.update(|c| c.push_error_once(NO_CODE_ERROR));
            return;
        }
        let lang = ui.get().effective_language();
        chat.update(|c| {
            c.begin_exchange(lang, &code);
            c.loading = true;
        });

        #[cfg(feature = "hydrate")]
        {
            let api_base = config.api_base.clone();
            let delay_ms = config.reply_reveal_delay_ms;
            leptos::task::spawn_local(async move {
                match crate::net::api::optimize(&api_base, lang, &code).await {
                    Ok(optimized) => {
                        chat.update(|c| c.loading = false);
                        // Brief pause so the reply lands after the spinner clears.
                        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                        chat.update(|c| c.push_reply(optimized));
                    }
                    Err(err) => {
                        chat.update(|c| {
                            c.loading = false;
                            c.push_error(err.user_message());
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    };

    let on_send = move |_| do_send();

    view! {
        <section class="chat-panel">
            <div class="chat-panel__history" node_ref=history_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            match msg.role {
                                Role::Header => view! {
                                    <div class="message message--bot message--header">
                                        <h2><strong>{content}</strong></h2>
                                    </div>
                                }
                                    .into_any(),
                                Role::User => view! {
                                    <div class="message message--user">
                                        <b>"User Query"</b>
                                        <pre><code>{content}</code></pre>
                                    </div>
                                }
                                    .into_any(),
                                Role::Bot => {
                                    let rendered = format_reply(&content);
                                    view! {
                                        <div class="message message--bot" inner_html=rendered></div>
                                    }
                                        .into_any()
                                }
                                Role::Error => view! {
                                    <div class="message message--bot message--error">{content}</div>
                                }
                                    .into_any(),
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    ui.get().at_home().then(|| {
                        view! {
                            <div class="message message--bot chat-panel__hint">
                                "Select a language from the left to begin optimizing your code."
                            </div>
                        }
                    })
                }}

                {move || {
                    chat.get()
                        .loading
                        .then(|| view! { <div class="chat-panel__loading">"Optimizing..."</div> })
                }}
            </div>

            // Hidden, not unmounted, in the home sub-state.
            <div
                class="chat-panel__input-row"
                class:chat-panel__input-row--hidden=move || ui.get().at_home()
            >
                <textarea
                    class="chat-panel__input"
                    rows="1"
                    placeholder=move || ui.get().input_placeholder()
                    node_ref=input_ref
                    prop:value=move || chat.get().input
                    on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_send
                    disabled=move || chat.get().loading
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}
