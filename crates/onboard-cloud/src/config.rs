//! Cloud service configuration.

/// Configuration for the cloud identity service (token + license API).
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// Token endpoint for the client-credentials grant.
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Scope requested with the grant.
    pub scope: String,
    /// Identity API root the license call goes to.
    pub api_base_url: String,
}

impl CloudConfig {
    /// Standard endpoints for a given identity tenant.
    pub fn for_tenant(tenant_id: &str, client_id: String, client_secret: String) -> Self {
        Self {
            token_url: format!("https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/token"),
            client_id,
            client_secret,
            scope: "https://graph.microsoft.com/.default".into(),
            api_base_url: "https://graph.microsoft.com/v1.0".into(),
        }
    }
}

/// Configuration for the telephony provider's extension API.
#[derive(Debug, Clone)]
pub struct TelephonyConfig {
    /// API root (account-scoped paths are appended).
    pub base_url: String,
    /// Pre-issued bearer token for the provider.
    pub access_token: String,
}

impl Default for TelephonyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://platform.ringcentral.com/restapi/v1.0".into(),
            access_token: String::new(),
        }
    }
}
