//! Application root: shared state contexts, router, and the HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::consts::{DEFAULT_API_BASE, DEFAULT_REPLY_REVEAL_DELAY_MS};
use crate::pages::workspace::WorkspacePage;
use crate::state::chat::ChatState;
use crate::state::summary::{DecomposeState, SummaryState};
use crate::state::ui::UiState;

/// Deployment knobs shared through context.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Origin of the optimization backend.
    pub api_base: String,
    /// Pause before a successful optimize reply is appended to the
    /// transcript.
    pub reply_reveal_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            reply_reveal_delay_ms: DEFAULT_REPLY_REVEAL_DELAY_MS,
        }
    }
}

/// HTML document shell rendered on the server and hydrated in the browser.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component wiring contexts and the single workspace route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ChatState::default()));
    provide_context(RwSignal::new(SummaryState::default()));
    provide_context(RwSignal::new(DecomposeState::default()));
    provide_context(AppConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/optichat.css"/>
        <Title text="Performance Code Optimizer"/>
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
