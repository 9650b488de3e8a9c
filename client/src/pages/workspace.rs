//! Workspace page hosting the sidebar and the three panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Derives the initial view from the URL hash once on mount, then renders
//! whichever panel the view state selects. Exactly one panel is shown at a
//! time.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::decompose_panel::DecomposePanel;
use crate::components::sidebar::Sidebar;
use crate::components::summary_builder::SummaryBuilder;
use crate::state::chat::ChatState;
use crate::state::ui::{Panel, UiState};
use crate::util::hash;

/// Initial view state for a location hash.
fn initial_ui_for_hash(hash: &str) -> UiState {
    let mut ui = UiState::default();
    match hash::parse_language_hash(hash) {
        Some(lang) => ui.select_language(lang),
        None => ui.go_home(),
    }
    ui
}

/// Single-route page: sidebar plus the active panel.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    // Apply the hash-selected view once on mount.
    let initialized = RwSignal::new(false);
    Effect::new(move || {
        if initialized.get() {
            return;
        }
        initialized.set(true);

        let state = initial_ui_for_hash(&hash::read_hash());
        ui.set(state);
        chat.update(|c| match state.language {
            Some(lang) => c.reset_for_language(lang),
            None => c.reset_for_home(),
        });
    });

    view! {
        <div class="workspace">
            <Sidebar/>
            <main class="workspace__panel">
                <Show when=move || ui.get().panel == Panel::Chat>
                    <ChatPanel/>
                </Show>
                <Show when=move || ui.get().panel == Panel::SummaryBuilder>
                    <SummaryBuilder/>
                </Show>
                <Show when=move || ui.get().panel == Panel::Decomposer>
                    <DecomposePanel/>
                </Show>
            </main>
        </div>
    }
}
