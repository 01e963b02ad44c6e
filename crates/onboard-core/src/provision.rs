//! The provisioning workflow.
//!
//! One run drives a single record through
//! `Collecting → Validated → LookedUp → Created → Populated | Failed`.
//! Nothing is resumable: after any failure the only recovery is re-running
//! from scratch, and partially provisioned work (an account created with
//! no groups) is left as-is for manual cleanup.

use tracing::{debug, error, info, warn};

use crate::calendar::WeekdayConvention;
use crate::directory::{DirectoryLookup, DirectoryWrite, GroupId, UserHandle};
use crate::error::{OnboardError, OnboardResult};
use crate::models::new_user::{NewUserInput, NewUserRecord};

/// Run-wide settings injected into the workflow.
#[derive(Debug, Clone)]
pub struct ProvisionSettings {
    /// Domain suffix for the principal name.
    pub domain: String,
    /// Active week-start convention for the start-day password.
    pub weekday_convention: WeekdayConvention,
}

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            domain: "example.com".into(),
            weekday_convention: WeekdayConvention::default(),
        }
    }
}

/// Lifecycle of one provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Collecting,
    Validated,
    LookedUp,
    Created,
    Populated,
    Failed,
}

/// One group the write adapter could not populate.
#[derive(Debug)]
pub struct GroupFailure {
    pub group: GroupId,
    pub error: OnboardError,
}

/// Terminal result of a successful run.
///
/// `Populated` with a non-empty `group_failures` list is a reported
/// partial success, not a failure: the account exists and the remaining
/// groups were still attempted.
#[derive(Debug)]
pub struct ProvisionOutcome {
    pub user: UserHandle,
    pub principal_name: String,
    /// Initial password the operator communicates to the new starter.
    pub password: String,
    pub groups_added: Vec<GroupId>,
    pub group_failures: Vec<GroupFailure>,
}

impl ProvisionOutcome {
    pub fn is_partial(&self) -> bool {
        !self.group_failures.is_empty()
    }
}

/// Drives one provisioning run against an injected directory adapter.
///
/// Sequential and synchronous in shape: every directory call is awaited
/// before the next starts, there is no retry anywhere, and timeouts are
/// whatever the underlying client enforces.
pub struct Provisioner<D> {
    directory: D,
    settings: ProvisionSettings,
}

impl<D> Provisioner<D>
where
    D: DirectoryLookup + DirectoryWrite,
{
    pub fn new(directory: D, settings: ProvisionSettings) -> Self {
        Self {
            directory,
            settings,
        }
    }

    /// Give the adapter back, e.g. to close its session after the run.
    pub fn into_directory(self) -> D {
        self.directory
    }

    /// Provision one account from operator input.
    ///
    /// Creation-time errors abort the run verbatim; per-group assignment
    /// failures are collected into the outcome without aborting siblings.
    pub async fn provision(&self, input: NewUserInput) -> OnboardResult<ProvisionOutcome> {
        match self.run(input).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                error!(state = ?RunState::Failed, error = %err, "provisioning run failed");
                Err(err)
            }
        }
    }

    async fn run(&self, input: NewUserInput) -> OnboardResult<ProvisionOutcome> {
        let mut state = RunState::Collecting;

        input.validate()?;
        transition(&mut state, RunState::Validated);

        let manager = self
            .directory
            .find_by_account_name(&input.manager_username)
            .await?
            .resolve(&input.manager_username)?;
        let template = self
            .directory
            .find_by_account_name(&input.template_username)
            .await?
            .resolve(&input.template_username)?;
        transition(&mut state, RunState::LookedUp);

        let record = NewUserRecord::assemble(
            input,
            &self.settings.domain,
            self.settings.weekday_convention,
            &manager,
            template,
        );
        if record.groups().is_empty() {
            warn!("template user has no group memberships to copy");
        }

        let request = record.create_request()?;
        let handle = self.directory.create_user(&request).await?;
        transition(&mut state, RunState::Created);
        info!(
            account = %handle.sam_account_name,
            dn = %handle.distinguished_name,
            "directory account created"
        );

        let mut groups_added = Vec::new();
        let mut group_failures = Vec::new();
        for group in record.groups() {
            match self.directory.add_user_to_group(&handle, group).await {
                Ok(()) => {
                    debug!(group = %group, "added user to group");
                    groups_added.push(group.clone());
                }
                Err(err) => {
                    warn!(group = %group, error = %err, "group assignment failed");
                    group_failures.push(GroupFailure {
                        group: group.clone(),
                        error: err,
                    });
                }
            }
        }
        transition(&mut state, RunState::Populated);

        Ok(ProvisionOutcome {
            principal_name: record.user_principal_name(),
            password: record.password(),
            user: handle,
            groups_added,
            group_failures,
        })
    }
}

fn transition(state: &mut RunState, next: RunState) {
    debug!(from = ?state, to = ?next, "provisioning state");
    *state = next;
}
