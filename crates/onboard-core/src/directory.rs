//! Directory adapter contracts.
//!
//! The core never talks to a directory itself; it consumes these traits.
//! Lookup failures distinguish "no match" from "several matches" with an
//! explicit outcome type instead of exceptions, and write operations carry
//! the full error taxonomy so the workflow can decide what aborts the run
//! and what is merely reported.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{OnboardError, OnboardResult};
use crate::models::template::TemplateUserSnapshot;

/// A group's distinguished name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub String);

impl GroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to an account the write adapter has created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHandle {
    pub distinguished_name: String,
    pub sam_account_name: String,
}

/// Everything the write adapter needs to create one account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub account_name: String,
    /// Parent container DN the entry is created under.
    pub container: String,
    pub common_name: String,
    pub given_name: String,
    pub surname: String,
    pub password: String,
    /// Remaining directory attributes (displayName, manager, mobile, ...).
    pub attributes: BTreeMap<String, String>,
}

/// Result of searching the directory for one username.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    NotFound,
    Found(TemplateUserSnapshot),
    /// More than one entry matched the username. The source scripts
    /// silently took the first result; here the tie-break is explicit.
    Ambiguous(Vec<TemplateUserSnapshot>),
}

impl LookupOutcome {
    /// Collapse the outcome into a single snapshot or an abort.
    ///
    /// Policy for ambiguous results: first match wins, with a warning
    /// recording how many entries matched. `username` is embedded in the
    /// `UserNotFound` message so the operator sees what was searched for.
    pub fn resolve(self, username: &str) -> OnboardResult<TemplateUserSnapshot> {
        match self {
            LookupOutcome::NotFound => Err(OnboardError::UserNotFound {
                username: username.to_string(),
            }),
            LookupOutcome::Found(snapshot) => Ok(snapshot),
            LookupOutcome::Ambiguous(matches) => {
                warn!(
                    username,
                    matches = matches.len(),
                    "multiple directory entries match; taking the first"
                );
                matches
                    .into_iter()
                    .next()
                    .ok_or_else(|| OnboardError::UserNotFound {
                        username: username.to_string(),
                    })
            }
        }
    }
}

/// Read side of the directory: find the template (or manager) account.
///
/// Connectivity and auth failures surface as `DirectoryUnavailable`. Both
/// that and `UserNotFound` are non-retryable within a run; the flow aborts
/// and the operator re-runs from scratch.
pub trait DirectoryLookup: Send + Sync {
    fn find_by_account_name(
        &self,
        username: &str,
    ) -> impl Future<Output = OnboardResult<LookupOutcome>> + Send;
}

/// Write side of the directory: create the account, then populate groups.
///
/// `create_user` fails with `DuplicateAccount`, `InvalidContainer` or
/// `PermissionDenied`; no group assignment may be attempted after a failed
/// creation. `add_user_to_group` is called once per group and its failures
/// are per-group (`GroupAssignmentFailed`) — creation is all-or-nothing,
/// group population is best-effort.
pub trait DirectoryWrite: Send + Sync {
    fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> impl Future<Output = OnboardResult<UserHandle>> + Send;

    fn add_user_to_group(
        &self,
        user: &UserHandle,
        group: &GroupId,
    ) -> impl Future<Output = OnboardResult<()>> + Send;
}
