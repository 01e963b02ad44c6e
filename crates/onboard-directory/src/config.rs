//! Directory gateway configuration.

/// Configuration for connecting to the directory REST gateway.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Gateway API root (e.g. `http://127.0.0.1:8080/directory/v1`).
    pub base_url: String,
    /// Token endpoint for the client-credentials grant.
    pub token_url: String,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/directory/v1".into(),
            token_url: "http://127.0.0.1:8080/oauth2/token".into(),
            client_id: "onboard".into(),
            client_secret: String::new(),
            timeout_secs: 30,
        }
    }
}
