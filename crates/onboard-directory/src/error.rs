//! Gateway-specific error types and conversions.

use onboard_core::OnboardError;

/// Transport-layer error talking to the directory gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token endpoint rejected client credentials: {status}")]
    TokenRejected { status: reqwest::StatusCode },

    #[error("unexpected gateway response: {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },
}

impl From<GatewayError> for OnboardError {
    fn from(err: GatewayError) -> Self {
        OnboardError::DirectoryUnavailable {
            reason: err.to_string(),
        }
    }
}
