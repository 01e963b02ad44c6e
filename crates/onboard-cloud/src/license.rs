//! License SKU assignment against the cloud identity API.

use serde::Serialize;
use tracing::info;

use crate::config::CloudConfig;
use crate::error::CloudError;
use crate::token::acquire_token;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignLicenseBody {
    pub add_licenses: Vec<LicenseSelector>,
    pub remove_licenses: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LicenseSelector {
    pub sku_id: String,
}

/// Client for assigning a license SKU to a principal.
pub struct LicenseClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl LicenseClient {
    /// Build the HTTP client and acquire an access token.
    pub async fn connect(config: &CloudConfig) -> Result<Self, CloudError> {
        let http = reqwest::Client::new();
        let token = acquire_token(&http, config).await?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Assign `sku_id` to the user identified by `principal_name`.
    ///
    /// Single request with a success check; a non-2xx response is reported
    /// with its status and body, never retried.
    pub async fn assign_license(
        &self,
        principal_name: &str,
        sku_id: &str,
    ) -> Result<(), CloudError> {
        let body = AssignLicenseBody {
            add_licenses: vec![LicenseSelector {
                sku_id: sku_id.to_string(),
            }],
            remove_licenses: Vec::new(),
        };

        let response = self
            .http
            .post(format!(
                "{}/users/{}/assignLicense",
                self.base_url, principal_name
            ))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CloudError::RequestFailed {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        info!(principal_name, sku_id, "license assigned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_body_matches_the_identity_api_shape() {
        let body = AssignLicenseBody {
            add_licenses: vec![LicenseSelector {
                sku_id: "c42b9cae-ea4f-4ab7-9717-81576235ccac".to_string(),
            }],
            remove_licenses: Vec::new(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value["addLicenses"][0]["skuId"],
            "c42b9cae-ea4f-4ab7-9717-81576235ccac"
        );
        assert_eq!(value["removeLicenses"], serde_json::json!([]));
    }
}
