//! View state: panel visibility and language selection.
//!
//! DESIGN
//! ======
//! One `panel` field makes the three top-level views mutually exclusive by
//! construction. The home sub-state (chat panel, no language chosen, input
//! row hidden) is `language: None`; requests made before any selection fall
//! back to Java via `effective_language`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Optimization target language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Java,
    Python,
    Js,
}

impl Language {
    /// Parse a URL-hash tag. Only the three supported tags match.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "java" => Some(Self::Java),
            "python" => Some(Self::Python),
            "js" => Some(Self::Js),
            _ => None,
        }
    }

    /// Tag used in the URL hash and endpoint paths.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Python => "python",
            Self::Js => "js",
        }
    }

    /// Uppercase name used in banners and placeholders.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Java => "JAVA",
            Self::Python => "PYTHON",
            Self::Js => "JS",
        }
    }
}

/// Top-level mutually exclusive panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    /// Chat / optimizer view (also hosts the home welcome).
    #[default]
    Chat,
    /// Four-field summary builder form.
    SummaryBuilder,
    /// Summary decomposer form.
    Decomposer,
}

/// Panel visibility and language selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub panel: Panel,
    pub language: Option<Language>,
}

impl UiState {
    /// Language used for requests; Java until a selection is made.
    pub fn effective_language(self) -> Language {
        self.language.unwrap_or_default()
    }

    /// True in the welcome view, where the chat input row is hidden.
    pub fn at_home(self) -> bool {
        self.panel == Panel::Chat && self.language.is_none()
    }

    /// Enter a language's optimizer view.
    pub fn select_language(&mut self, lang: Language) {
        self.language = Some(lang);
        self.panel = Panel::Chat;
    }

    /// Return to the welcome view.
    pub fn go_home(&mut self) {
        self.language = None;
        self.panel = Panel::Chat;
    }

    /// Show the summary builder, hiding the other panels.
    pub fn show_summary_builder(&mut self) {
        self.panel = Panel::SummaryBuilder;
    }

    /// Show the decomposer, hiding the other panels.
    pub fn show_decomposer(&mut self) {
        self.panel = Panel::Decomposer;
    }

    /// Placeholder for the chat input.
    pub fn input_placeholder(self) -> String {
        match self.language {
            Some(lang) => format!("Optimize your {} code...", lang.display_name()),
            None => "Welcome to the Performance Code Optimizer...".to_owned(),
        }
    }
}
