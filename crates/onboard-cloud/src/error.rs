//! Cloud client error types.

use thiserror::Error;

/// Failure of a single-shot cloud API exchange. Nothing here is retried:
/// each flow is one request, one success check, one printed outcome.
#[derive(Debug, Error)]
pub enum CloudError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token endpoint rejected client credentials: {status}")]
    TokenRejected { status: reqwest::StatusCode },

    #[error("request failed with status {status}: {body}")]
    RequestFailed {
        status: reqwest::StatusCode,
        body: String,
    },
}
