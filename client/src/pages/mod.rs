//! Route-level screens. The app has a single route; the workspace page owns
//! hash-derived initialization and delegates rendering to `components`.

pub mod workspace;
