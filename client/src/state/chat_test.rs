use super::*;
use crate::util::format::format_reply;

// =============================================================
// Resets
// =============================================================

#[test]
fn default_transcript_shows_welcome_banner() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Header);
    assert_eq!(state.messages[0].content, "Welcome to Performance Code Optimizer");
    assert!(!state.loading);
}

#[test]
fn reset_for_language_replaces_transcript_with_banner() {
    let mut state = ChatState::default();
    state.push_reply("old reply".to_owned());
    state.input = "draft".to_owned();
    state.reset_for_language(Language::Java);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Header);
    assert_eq!(state.messages[0].content, "JAVA Performance Optimization");
    assert!(state.input.is_empty());
}

// =============================================================
// Exchange policy
// =============================================================

#[test]
fn begin_exchange_rebuilds_banner_and_user_message() {
    let mut state = ChatState::default();
    state.push_reply("stale".to_owned());
    state.input = "fn main() {}".to_owned();
    state.begin_exchange(Language::Js, "fn main() {}");
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::Header);
    assert_eq!(state.messages[0].content, "JS Performance Optimization");
    assert_eq!(state.messages[1].role, Role::User);
    assert_eq!(state.messages[1].content, "fn main() {}");
    assert!(state.input.is_empty());
}

#[test]
fn push_reply_appends_bot_entry() {
    let mut state = ChatState::default();
    state.begin_exchange(Language::Java, "code");
    state.push_reply("looks fine".to_owned());
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].role, Role::Bot);
    assert_eq!(state.messages[2].content, "looks fine");
}

// =============================================================
// Error entries
// =============================================================

#[test]
fn push_error_once_keeps_a_single_entry_across_repeats() {
    let mut state = ChatState::default();
    state.push_error_once(NO_CODE_ERROR);
    state.push_error_once(NO_CODE_ERROR);
    let errors: Vec<_> = state
        .messages
        .iter()
        .filter(|m| m.role == Role::Error && m.content == NO_CODE_ERROR)
        .collect();
    assert_eq!(errors.len(), 1);
}

#[test]
fn push_error_once_keeps_distinct_errors() {
    let mut state = ChatState::default();
    state.push_error_once(NO_CODE_ERROR);
    state.push_error_once("Error: Server is unreachable. Please try again later.");
    let errors: Vec<_> = state.messages.iter().filter(|m| m.role == Role::Error).collect();
    assert_eq!(errors.len(), 2);
}

// =============================================================
// End-to-end transcript shape for a python exchange
// =============================================================

#[test]
fn python_exchange_renders_tagged_code_block() {
    let mut state = ChatState::default();
    state.reset_for_language(Language::Python);
    state.begin_exchange(Language::Python, "print(1)");
    state.push_reply("```python\nprint(1)\n```".to_owned());

    assert_eq!(state.messages[1].role, Role::User);
    assert_eq!(state.messages[1].content, "print(1)");

    let rendered = format_reply(&state.messages[2].content);
    assert!(rendered.contains("<pre><code class=\"language-python\">print(1)\n</code></pre>"));
}

// =============================================================
// Banner helper
// =============================================================

#[test]
fn banner_for_uppercases_language() {
    assert_eq!(banner_for(Language::Python), "PYTHON Performance Optimization");
}
