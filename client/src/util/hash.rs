//! URL-hash navigation helpers.
//!
//! The hash is the page's only navigation surface: `#java`, `#python`, and
//! `#js` enter a language view, anything else means home. Browser access is
//! `hydrate`-only; SSR paths return defaults so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "hash_test.rs"]
mod hash_test;

use crate::state::ui::Language;

/// Parse a location hash (with or without the leading `#`) into a supported
/// language. Anything unrecognized means the home view.
pub fn parse_language_hash(hash: &str) -> Option<Language> {
    Language::from_tag(hash.strip_prefix('#').unwrap_or(hash))
}

/// Read the current location hash. Returns an empty string on the server.
pub fn read_hash() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Set the location hash; pass an empty string to clear it.
pub fn write_hash(tag: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(tag);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tag;
    }
}
