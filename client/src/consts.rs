//! Shared configuration defaults.

/// Backend origin used when no override is provided.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Pause, in milliseconds, before a successful optimize reply is appended
/// to the transcript.
pub const DEFAULT_REPLY_REVEAL_DELAY_MS: u32 = 500;
