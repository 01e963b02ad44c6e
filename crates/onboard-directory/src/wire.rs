//! Wire DTOs for the directory gateway API.

use std::collections::BTreeMap;

use onboard_core::{CreateUserRequest, GroupId, TemplateUserSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub entries: Vec<DirectoryEntry>,
}

/// One user entry as returned by `GET /users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectoryEntry {
    pub distinguished_name: String,
    pub sam_account_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub member_of: Vec<String>,
}

impl DirectoryEntry {
    pub(crate) fn into_snapshot(self) -> TemplateUserSnapshot {
        TemplateUserSnapshot {
            distinguished_name: self.distinguished_name,
            sam_account_name: self.sam_account_name,
            display_name: self.display_name,
            title: self.title,
            description: self.description,
            department: self.department,
            company: self.company,
            member_of: self.member_of.into_iter().map(GroupId).collect(),
        }
    }
}

/// Body of `POST /users`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUserBody<'a> {
    pub account_name: &'a str,
    pub container: &'a str,
    pub common_name: &'a str,
    pub given_name: &'a str,
    pub surname: &'a str,
    pub password: &'a str,
    pub attributes: &'a BTreeMap<String, String>,
}

impl<'a> From<&'a CreateUserRequest> for CreateUserBody<'a> {
    fn from(request: &'a CreateUserRequest) -> Self {
        Self {
            account_name: &request.account_name,
            container: &request.container,
            common_name: &request.common_name,
            given_name: &request.given_name,
            surname: &request.surname,
            password: &request.password,
            attributes: &request.attributes,
        }
    }
}

/// Response of a successful `POST /users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatedUser {
    pub distinguished_name: String,
    pub sam_account_name: String,
}

/// Body of `POST /groups/members`.
#[derive(Debug, Serialize)]
pub(crate) struct GroupMemberBody<'a> {
    pub group: &'a str,
    pub member: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_with_missing_optional_fields() {
        let entry: DirectoryEntry = serde_json::from_str(
            r#"{
                "distinguishedName": "CN=tmpl.user,OU=Staff,DC=example,DC=com",
                "samAccountName": "tmpl.user"
            }"#,
        )
        .unwrap();
        let snapshot = entry.into_snapshot();
        assert_eq!(snapshot.sam_account_name, "tmpl.user");
        assert!(snapshot.member_of.is_empty());
        assert!(snapshot.company.is_empty());
    }

    #[test]
    fn entry_maps_groups_into_ids() {
        let entry: DirectoryEntry = serde_json::from_str(
            r#"{
                "distinguishedName": "CN=tmpl.user,OU=Staff,DC=example,DC=com",
                "samAccountName": "tmpl.user",
                "memberOf": ["CN=staff,DC=example,DC=com", "CN=vpn,DC=example,DC=com"]
            }"#,
        )
        .unwrap();
        let snapshot = entry.into_snapshot();
        assert_eq!(snapshot.member_of.len(), 2);
        assert_eq!(snapshot.member_of[0].as_str(), "CN=staff,DC=example,DC=com");
    }

    #[test]
    fn create_body_serializes_camel_case() {
        let mut attributes = BTreeMap::new();
        attributes.insert("displayName".to_string(), "Doe, Jane".to_string());
        let request = CreateUserRequest {
            account_name: "jane.doe".to_string(),
            container: "OU=Staff,DC=example,DC=com".to_string(),
            common_name: "jane.doe".to_string(),
            given_name: "jane".to_string(),
            surname: "doe".to_string(),
            password: "Monday11032024!".to_string(),
            attributes,
        };

        let value = serde_json::to_value(CreateUserBody::from(&request)).unwrap();
        assert_eq!(value["accountName"], "jane.doe");
        assert_eq!(value["container"], "OU=Staff,DC=example,DC=com");
        assert_eq!(value["attributes"]["displayName"], "Doe, Jane");
    }
}
