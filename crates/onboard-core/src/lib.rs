//! Onboard Core — new-user attribute derivation and the account-creation
//! workflow.
//!
//! This crate holds the domain model (the new-user record and the
//! template-user snapshot), the pure attribute derivations (account name,
//! principal name, display name, start-day password, target container),
//! the directory adapter contracts, and the provisioning state machine.
//! Concrete directory and HTTP backends live in sibling crates.

pub mod calendar;
pub mod derive;
pub mod directory;
pub mod dn;
pub mod error;
pub mod models;
pub mod provision;

pub use calendar::WeekdayConvention;
pub use directory::{
    CreateUserRequest, DirectoryLookup, DirectoryWrite, GroupId, LookupOutcome, UserHandle,
};
pub use error::{OnboardError, OnboardResult};
pub use models::new_user::{NewUserInput, NewUserRecord};
pub use models::template::TemplateUserSnapshot;
pub use provision::{GroupFailure, ProvisionOutcome, ProvisionSettings, Provisioner, RunState};
