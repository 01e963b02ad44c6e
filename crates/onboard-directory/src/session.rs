//! Directory session management.
//!
//! The original workflow opened a process-wide directory session at import
//! time. Here the session is constructed explicitly at process start,
//! injected into the adapters, and closed at process end.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use tracing::info;

use crate::config::DirectoryConfig;
use crate::error::GatewayError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// An authenticated connection to the directory gateway.
pub struct DirectorySession {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl DirectorySession {
    /// Connect to the gateway: build the HTTP client and acquire a bearer
    /// token via the client-credentials grant.
    pub async fn connect(config: &DirectoryConfig) -> Result<Self, GatewayError> {
        info!(url = %config.base_url, "connecting to directory gateway");

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let response = http
            .post(&config.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::TokenRejected {
                status: response.status(),
            });
        }
        let token: TokenResponse = response.json().await?;

        info!("directory session established");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: token.access_token,
        })
    }

    /// End the session. The bearer token simply expires server-side; this
    /// marks the explicit end of the session's lifecycle.
    pub fn close(self) {
        info!("directory session closed");
    }

    /// Start an authenticated request against a gateway path.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
    }
}
