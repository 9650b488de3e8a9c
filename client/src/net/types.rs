//! Wire DTOs for the optimization backend.
//!
//! DESIGN
//! ======
//! Types mirror the backend's JSON shapes (camelCase `rootCause` included)
//! so serde round-trips stay lossless. Fields the backend may omit decode
//! as empty strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /optimize-{lang}` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizeRequest {
    pub code: String,
}

/// `POST /optimize-{lang}` success response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OptimizeResponse {
    pub optimized: String,
}

/// `POST /summarize` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest {
    pub problem: String,
    pub impact: String,
    #[serde(rename = "rootCause")]
    pub root_cause: String,
    pub fix: String,
}

/// `POST /summarize` success response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// `POST /decompose-summary` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecomposeRequest {
    pub summary: String,
}

/// `POST /decompose-summary` success response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DecomposeResponse {
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub impact: String,
    #[serde(rename = "rootCause", default)]
    pub root_cause: String,
    #[serde(default)]
    pub fix: String,
}

/// Error body any endpoint may return alongside a non-success status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
