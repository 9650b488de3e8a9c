//! Sidebar navigation: home, the three languages, and the form panels.
//!
//! Entries are disabled while an optimize request is in flight so the
//! active exchange cannot be abandoned mid-flight.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::summary::{DecomposeState, SummaryState};
use crate::state::ui::{Language, Panel, UiState};
use crate::util::hash;

/// Fixed navigation sidebar.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let summary = expect_context::<RwSignal<SummaryState>>();
    let decompose = expect_context::<RwSignal<DecomposeState>>();

    let locked = move || chat.get().loading;

    let clear_form_errors = move || {
        summary.update(|s| s.error.clear());
        decompose.update(|d| d.error.clear());
    };

    let on_home = move |_| {
        if locked() {
            return;
        }
        ui.update(UiState::go_home);
        chat.update(ChatState::reset_for_home);
        clear_form_errors();
        hash::write_hash("");
    };

    let select = move |lang: Language| {
        if locked() {
            return;
        }
        ui.update(|u| u.select_language(lang));
        chat.update(|c| c.reset_for_language(lang));
        clear_form_errors();
        hash::write_hash(lang.tag());
    };

    let on_summary = move |_| {
        if locked() {
            return;
        }
        ui.update(UiState::show_summary_builder);
        summary.update(|s| s.error.clear());
    };

    let on_decompose = move |_| {
        if locked() {
            return;
        }
        ui.update(UiState::show_decomposer);
        decompose.update(|d| d.error.clear());
    };

    let language_entry = move |lang: Language, label: &'static str| {
        view! {
            <button
                class="sidebar__link"
                class:sidebar__link--active=move || ui.get().language == Some(lang)
                on:click=move |_| select(lang)
                disabled=locked
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="sidebar" class:sidebar--locked=locked>
            <button class="sidebar__brand" on:click=on_home disabled=locked>
                "Performance Code Optimizer"
            </button>

            <span class="sidebar__heading">"Languages"</span>
            {language_entry(Language::Java, "Java")}
            {language_entry(Language::Python, "Python")}
            {language_entry(Language::Js, "JavaScript")}

            <span class="sidebar__heading">"Reports"</span>
            <button
                class="sidebar__link"
                class:sidebar__link--active=move || ui.get().panel == Panel::SummaryBuilder
                on:click=on_summary
                disabled=locked
            >
                "Summary Builder"
            </button>
            <button
                class="sidebar__link"
                class:sidebar__link--active=move || ui.get().panel == Panel::Decomposer
                on:click=on_decompose
                disabled=locked
            >
                "Summary Decomposer"
            </button>
        </nav>
    }
}
