//! Template-user snapshot model.

use serde::{Deserialize, Serialize};

use crate::directory::GroupId;

/// Read-only result of looking up the template user (or the manager).
///
/// Owned by the new-user record for the duration of one provisioning run
/// and never mutated. `member_of` is the raw membership list as returned
/// by the directory; it may contain duplicates, which are dropped when the
/// list is attached to a [`NewUserRecord`].
///
/// [`NewUserRecord`]: crate::models::new_user::NewUserRecord
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateUserSnapshot {
    pub distinguished_name: String,
    pub sam_account_name: String,
    pub display_name: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub company: String,
    pub member_of: Vec<GroupId>,
}
