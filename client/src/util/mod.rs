//! Helpers shared by the panels: reply formatting, hash navigation, and
//! textarea autosizing.
//!
//! Browser access stays behind `hydrate` gates here so page and component
//! logic remains natively testable.

pub mod autosize;
pub mod format;
pub mod hash;
