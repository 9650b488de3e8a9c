//! Shared application state.
//!
//! DESIGN
//! ======
//! Each state family is a plain struct with transition methods, stored in an
//! `RwSignal` provided via context from `App`. Keeping the structs free of
//! reactive types lets every transition be unit-tested natively.

pub mod chat;
pub mod summary;
pub mod ui;
