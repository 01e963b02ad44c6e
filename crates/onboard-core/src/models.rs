//! Domain models for the provisioning workflow.

pub mod new_user;
pub mod template;
