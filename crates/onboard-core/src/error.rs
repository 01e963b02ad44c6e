//! Error types for the onboarding toolkit.

use thiserror::Error;

/// Everything that can go wrong during one provisioning run.
///
/// Nothing here is retried automatically: the tool is single-operator and
/// single-shot, so every creation-time error aborts the run and is surfaced
/// verbatim with the offending identifier. [`GroupAssignmentFailed`] is the
/// one non-fatal variant; it is collected per group after account creation.
///
/// [`GroupAssignmentFailed`]: OnboardError::GroupAssignmentFailed
#[derive(Debug, Error)]
pub enum OnboardError {
    #[error("invalid input: {message}")]
    InputInvalid { message: String },

    #[error("no directory entry matches username {username}")]
    UserNotFound { username: String },

    #[error("directory unavailable: {reason}")]
    DirectoryUnavailable { reason: String },

    #[error("account {account} already exists")]
    DuplicateAccount { account: String },

    #[error("target container does not exist: {container}")]
    InvalidContainer { container: String },

    #[error("permission denied: {reason}")]
    PermissionDenied { reason: String },

    #[error("failed to add user to group {group}: {reason}")]
    GroupAssignmentFailed { group: String, reason: String },
}

pub type OnboardResult<T> = Result<T, OnboardError>;
