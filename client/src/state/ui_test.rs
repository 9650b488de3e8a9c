use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_home() {
    let state = UiState::default();
    assert_eq!(state.panel, Panel::Chat);
    assert_eq!(state.language, None);
    assert!(state.at_home());
}

#[test]
fn effective_language_defaults_to_java() {
    let state = UiState::default();
    assert_eq!(state.effective_language(), Language::Java);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn select_language_shows_chat_panel() {
    let mut state = UiState::default();
    state.show_summary_builder();
    state.select_language(Language::Python);
    assert_eq!(state.panel, Panel::Chat);
    assert_eq!(state.language, Some(Language::Python));
    assert!(!state.at_home());
}

#[test]
fn go_home_clears_language_and_shows_chat_panel() {
    let mut state = UiState::default();
    state.select_language(Language::Js);
    state.show_decomposer();
    state.go_home();
    assert_eq!(state.panel, Panel::Chat);
    assert_eq!(state.language, None);
    assert!(state.at_home());
}

#[test]
fn panels_are_mutually_exclusive() {
    let mut state = UiState::default();
    state.show_summary_builder();
    assert_eq!(state.panel, Panel::SummaryBuilder);
    state.show_decomposer();
    assert_eq!(state.panel, Panel::Decomposer);
    state.select_language(Language::Java);
    assert_eq!(state.panel, Panel::Chat);
}

#[test]
fn form_panels_keep_selected_language() {
    let mut state = UiState::default();
    state.select_language(Language::Python);
    state.show_summary_builder();
    assert_eq!(state.language, Some(Language::Python));
    assert!(!state.at_home());
}

// =============================================================
// Language
// =============================================================

#[test]
fn language_from_tag_accepts_supported_tags() {
    assert_eq!(Language::from_tag("java"), Some(Language::Java));
    assert_eq!(Language::from_tag("python"), Some(Language::Python));
    assert_eq!(Language::from_tag("js"), Some(Language::Js));
}

#[test]
fn language_from_tag_rejects_everything_else() {
    assert_eq!(Language::from_tag(""), None);
    assert_eq!(Language::from_tag("rust"), None);
    assert_eq!(Language::from_tag("JAVA"), None);
}

#[test]
fn language_tag_round_trips() {
    for lang in [Language::Java, Language::Python, Language::Js] {
        assert_eq!(Language::from_tag(lang.tag()), Some(lang));
    }
}

// =============================================================
// Placeholder text
// =============================================================

#[test]
fn placeholder_mentions_selected_language() {
    let mut state = UiState::default();
    state.select_language(Language::Python);
    assert_eq!(state.input_placeholder(), "Optimize your PYTHON code...");
}

#[test]
fn placeholder_is_welcome_text_at_home() {
    let state = UiState::default();
    assert_eq!(
        state.input_placeholder(),
        "Welcome to the Performance Code Optimizer..."
    );
}
