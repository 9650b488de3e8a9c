//! HTTP calls to the optimization backend.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures map onto three user-visible cases: the server answered with an
//! error payload, the server never answered, or the request could not be
//! built or decoded. Callers surface `user_message()` verbatim and always
//! restore the UI to an interactive state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::state::summary::SummaryDraft;
use crate::state::ui::Language;
use super::types::DecomposeResponse;
#[cfg(feature = "hydrate")]
use super::types::{
    DecomposeRequest, ErrorBody, OptimizeRequest, OptimizeResponse, SummarizeRequest,
    SummarizeResponse,
};

/// A failed backend exchange.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server responded with a non-success status, optionally carrying
    /// an error message.
    #[error("server error: {0:?}")]
    Server(Option<String>),
    /// No response arrived.
    #[error("server unreachable")]
    Unreachable,
    /// The request could not be built, sent, or decoded.
    #[error("request failed: {0}")]
    Request(String),
}

impl ApiError {
    /// Text shown in the transcript or a form's error element.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(Some(message)) => format!("Server Error: {message}"),
            Self::Server(None) => "Server Error: Something went wrong".to_owned(),
            Self::Unreachable => {
                "Error: Server is unreachable. Please try again later.".to_owned()
            }
            Self::Request(raw) => format!("Unexpected Error: {raw}"),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn optimize_endpoint(base: &str, lang: Language) -> String {
    format!("{base}/optimize-{}", lang.tag())
}

#[cfg(any(test, feature = "hydrate"))]
fn summarize_endpoint(base: &str) -> String {
    format!("{base}/summarize")
}

#[cfg(any(test, feature = "hydrate"))]
fn decompose_endpoint(base: &str) -> String {
    format!("{base}/decompose-summary")
}

/// POST `body` as JSON and decode a success response, mapping every failure
/// onto the `ApiError` taxonomy.
#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let Ok(response) = request.send().await else {
        return Err(ApiError::Unreachable);
    };
    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        return Err(ApiError::Server(message));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Request an optimized version of `code` for the selected language.
///
/// # Errors
///
/// Returns an [`ApiError`] naming the taxonomy case; see the module docs.
pub async fn optimize(base: &str, lang: Language, code: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = optimize_endpoint(base, lang);
        let body = OptimizeRequest { code: code.to_owned() };
        let response: OptimizeResponse = post_json(&url, &body).await?;
        Ok(response.optimized)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, lang, code);
        Err(ApiError::Request("not available on server".to_owned()))
    }
}

/// Summarize a four-field problem report into one text.
///
/// # Errors
///
/// Returns an [`ApiError`] naming the taxonomy case; see the module docs.
pub async fn summarize(base: &str, draft: &SummaryDraft) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = summarize_endpoint(base);
        let body = SummarizeRequest {
            problem: draft.problem.clone(),
            impact: draft.impact.clone(),
            root_cause: draft.root_cause.clone(),
            fix: draft.fix.clone(),
        };
        let response: SummarizeResponse = post_json(&url, &body).await?;
        Ok(response.summary)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, draft);
        Err(ApiError::Request("not available on server".to_owned()))
    }
}

/// Decompose a summarized report back into its four fields.
///
/// # Errors
///
/// Returns an [`ApiError`] naming the taxonomy case; see the module docs.
pub async fn decompose(base: &str, summary: &str) -> Result<DecomposeResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = decompose_endpoint(base);
        let body = DecomposeRequest { summary: summary.to_owned() };
        post_json(&url, &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, summary);
        Err(ApiError::Request("not available on server".to_owned()))
    }
}
