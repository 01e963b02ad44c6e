//! REST gateway implementation of the core directory contracts.

use onboard_core::{
    CreateUserRequest, DirectoryLookup, DirectoryWrite, GroupId, LookupOutcome, OnboardError,
    OnboardResult, UserHandle,
};
use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::error::GatewayError;
use crate::session::DirectorySession;
use crate::wire;

/// Directory adapter backed by the REST gateway session.
pub struct RestDirectory {
    session: DirectorySession,
}

impl RestDirectory {
    pub fn new(session: DirectorySession) -> Self {
        Self { session }
    }

    /// Give the session back so the caller can close it explicitly.
    pub fn into_session(self) -> DirectorySession {
        self.session
    }
}

impl DirectoryLookup for RestDirectory {
    async fn find_by_account_name(&self, username: &str) -> OnboardResult<LookupOutcome> {
        debug!(username, "searching directory");
        let response = self
            .session
            .request(Method::GET, "/users")
            .query(&[("samAccountName", username)])
            .send()
            .await
            .map_err(GatewayError::from)?;

        if !response.status().is_success() {
            return Err(GatewayError::UnexpectedStatus {
                status: response.status(),
            }
            .into());
        }

        let body: wire::SearchResponse = response.json().await.map_err(GatewayError::from)?;
        let mut snapshots: Vec<_> = body
            .entries
            .into_iter()
            .map(wire::DirectoryEntry::into_snapshot)
            .collect();

        Ok(match snapshots.len() {
            0 => LookupOutcome::NotFound,
            1 => LookupOutcome::Found(snapshots.remove(0)),
            _ => LookupOutcome::Ambiguous(snapshots),
        })
    }
}

impl DirectoryWrite for RestDirectory {
    async fn create_user(&self, request: &CreateUserRequest) -> OnboardResult<UserHandle> {
        let response = self
            .session
            .request(Method::POST, "/users")
            .json(&wire::CreateUserBody::from(request))
            .send()
            .await
            .map_err(GatewayError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_create_failure(status, request));
        }

        let created: wire::CreatedUser = response.json().await.map_err(GatewayError::from)?;
        Ok(UserHandle {
            distinguished_name: created.distinguished_name,
            sam_account_name: created.sam_account_name,
        })
    }

    async fn add_user_to_group(&self, user: &UserHandle, group: &GroupId) -> OnboardResult<()> {
        let body = wire::GroupMemberBody {
            group: group.as_str(),
            member: &user.distinguished_name,
        };
        let result = self
            .session
            .request(Method::POST, "/groups/members")
            .json(&body)
            .send()
            .await;

        // Any failure here is per-group: the workflow keeps going.
        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(OnboardError::GroupAssignmentFailed {
                group: group.as_str().to_string(),
                reason: format!("gateway returned {}", response.status()),
            }),
            Err(err) => Err(OnboardError::GroupAssignmentFailed {
                group: group.as_str().to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

/// Map a non-success creation status onto the core error taxonomy.
fn classify_create_failure(status: StatusCode, request: &CreateUserRequest) -> OnboardError {
    match status {
        StatusCode::CONFLICT => OnboardError::DuplicateAccount {
            account: request.account_name.clone(),
        },
        StatusCode::NOT_FOUND => OnboardError::InvalidContainer {
            container: request.container.clone(),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => OnboardError::PermissionDenied {
            reason: format!("gateway returned {status}"),
        },
        other => OnboardError::DirectoryUnavailable {
            reason: format!("user creation failed with status {other}"),
        },
    }
}
