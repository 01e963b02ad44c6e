//! Telephony extension listing and assignment.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::TelephonyConfig;
use crate::error::CloudError;

/// One extension record from the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub id: i64,
    #[serde(default)]
    pub extension_number: String,
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<Extension>,
}

/// Contact details the extension is assigned to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignExtensionBody<'a> {
    pub status: &'static str,
    pub contact: &'a ExtensionContact,
}

/// Client for the telephony provider's extension API.
pub struct ExtensionClient {
    http: reqwest::Client,
    config: TelephonyConfig,
}

impl ExtensionClient {
    pub fn new(config: TelephonyConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// List extensions currently unassigned on the account.
    pub async fn list_unassigned(&self) -> Result<Vec<Extension>, CloudError> {
        let response = self
            .http
            .get(format!("{}/account/~/extension", self.config.base_url))
            .bearer_auth(&self.config.access_token)
            .query(&[("status", "Unassigned")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CloudError::RequestFailed {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: RecordsResponse = response.json().await?;
        Ok(body.records)
    }

    /// Assign an unassigned extension to the given contact.
    pub async fn assign(
        &self,
        extension_id: i64,
        contact: &ExtensionContact,
    ) -> Result<(), CloudError> {
        let body = AssignExtensionBody {
            status: "Enabled",
            contact,
        };

        let response = self
            .http
            .put(format!(
                "{}/account/~/extension/{extension_id}",
                self.config.base_url
            ))
            .bearer_auth(&self.config.access_token)
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

        info!(extension_id, email = %contact.email, "extension assigned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_deserialize_from_the_provider_shape() {
        let body: RecordsResponse = serde_json::from_str(
            r#"{"records": [{"id": 101, "extensionNumber": "4321"}, {"id": 102}]}"#,
        )
        .unwrap();
        assert_eq!(body.records.len(), 2);
        assert_eq!(body.records[0].extension_number, "4321");
        assert!(body.records[1].extension_number.is_empty());
    }

    #[test]
    fn assign_body_enables_the_extension_for_the_contact() {
        let contact = ExtensionContact {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
        };
        let value = serde_json::to_value(AssignExtensionBody {
            status: "Enabled",
            contact: &contact,
        })
        .unwrap();
        assert_eq!(value["status"], "Enabled");
        assert_eq!(value["contact"]["firstName"], "Jane");
        assert_eq!(value["contact"]["email"], "jane.doe@example.com");
    }
}
