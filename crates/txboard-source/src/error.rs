//! Error types for txboard-source

use thiserror::Error;

/// Upstream fetch failure
///
/// Every way the dataset source can fail collapses into one of these
/// variants; the API layer renders them all as the same 500 response.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network failure or non-success status from the upstream endpoint
    #[error("Dataset request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint responded but the body was not a valid dataset
    #[error("Malformed dataset payload: {0}")]
    Payload(#[from] serde_json::Error),
}
