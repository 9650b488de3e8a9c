//! Chat transcript state and exchange policy.
//!
//! DESIGN
//! ======
//! The transcript is rebuilt per exchange: a banner entry for the selected
//! language plus the user's message, with the bot reply appended when it
//! arrives. Validation errors are transcript entries too, deduplicated by
//! content so repeated empty submissions keep a single visible error.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::state::ui::Language;

/// Shown when Send is pressed with an empty input.
pub const NO_CODE_ERROR: &str = "Error: No code provided";

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Banner line (language or welcome header).
    Header,
    /// The user's submitted code.
    User,
    /// Raw backend reply; formatted at render time.
    Bot,
    /// Inline error entry (validation or request failure).
    Error,
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

/// Transcript, draft input, and the in-flight request flag.
///
/// `loading` doubles as the navigation soft lock: the sidebar and Send
/// button are disabled while it is set.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            input: String::new(),
            loading: false,
        };
        state.reset_for_home();
        state
    }
}

impl ChatState {
    /// Replace the transcript with the welcome banner and clear the input.
    pub fn reset_for_home(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.push(Role::Header, "Welcome to Performance Code Optimizer".to_owned());
    }

    /// Replace the transcript with the language banner and clear the input.
    pub fn reset_for_language(&mut self, lang: Language) {
        self.messages.clear();
        self.input.clear();
        self.push(Role::Header, banner_for(lang));
    }

    /// Start a new exchange: banner plus the user's message; the input is
    /// consumed.
    pub fn begin_exchange(&mut self, lang: Language, code: &str) {
        self.messages.clear();
        self.input.clear();
        self.push(Role::Header, banner_for(lang));
        self.push(Role::User, code.to_owned());
    }

    /// Append the backend reply.
    pub fn push_reply(&mut self, reply: String) {
        self.push(Role::Bot, reply);
    }

    /// Append an error entry.
    pub fn push_error(&mut self, text: String) {
        self.push(Role::Error, text);
    }

    /// Append an error entry, removing earlier copies with the same text so
    /// it appears exactly once.
    pub fn push_error_once(&mut self, text: &str) {
        self.messages
            .retain(|m| !(m.role == Role::Error && m.content == text));
        self.push(Role::Error, text.to_owned());
    }

    fn push(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
        });
    }
}

/// Banner text for a selected language.
pub fn banner_for(lang: Language) -> String {
    format!("{} Performance Optimization", lang.display_name())
}
