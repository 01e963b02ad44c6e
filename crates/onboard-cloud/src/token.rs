//! Client-credentials token acquisition for the cloud identity service.

use serde::Deserialize;
use tracing::debug;

use crate::config::CloudConfig;
use crate::error::CloudError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Acquire a bearer token with the client-credentials grant.
pub async fn acquire_token(
    http: &reqwest::Client,
    config: &CloudConfig,
) -> Result<String, CloudError> {
    debug!(url = %config.token_url, "requesting access token");

    let response = http
        .post(&config.token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("scope", config.scope.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(CloudError::TokenRejected {
            status: response.status(),
        });
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}
