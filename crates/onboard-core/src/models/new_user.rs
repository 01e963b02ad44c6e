//! New-user input and record models.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::WeekdayConvention;
use crate::derive;
use crate::directory::{CreateUserRequest, GroupId};
use crate::dn;
use crate::error::{OnboardError, OnboardResult};
use crate::models::template::TemplateUserSnapshot;

/// Operator-collected fields for the account being provisioned.
///
/// No validation beyond non-empty is performed — the workflow rejects
/// missing fields at construction time, before any directory call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserInput {
    pub given_name: String,
    pub surname: String,
    /// sAMAccountName of the user whose attributes and groups are copied.
    pub template_username: String,
    /// sAMAccountName of the new user's manager.
    pub manager_username: String,
    pub mobile: String,
    pub title: String,
    /// Defaults to today when unset.
    pub start_date: Option<NaiveDate>,
}

impl NewUserInput {
    /// Reject empty required fields with `InputInvalid`.
    pub fn validate(&self) -> OnboardResult<()> {
        let required = [
            ("first name", &self.given_name),
            ("last name", &self.surname),
            ("template username", &self.template_username),
            ("manager username", &self.manager_username),
            ("mobile number", &self.mobile),
            ("title", &self.title),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(OnboardError::InputInvalid {
                    message: format!("{label} must not be empty"),
                });
            }
        }
        Ok(())
    }

    /// The effective start date: the collected one, or today.
    pub fn effective_start_date(&self) -> NaiveDate {
        self.start_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Immutable value object describing the account to create.
///
/// Built once per run from validated input plus the template and manager
/// lookups, then only read. Derived attributes delegate to the pure
/// functions in [`crate::derive`] so each derivation stays independently
/// testable.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    given_name: String,
    surname: String,
    title: String,
    mobile: String,
    start_date: NaiveDate,
    convention: WeekdayConvention,
    domain: String,
    manager_dn: String,
    template: TemplateUserSnapshot,
    groups: Vec<GroupId>,
}

impl NewUserRecord {
    /// Assemble the record from validated input and lookup results.
    ///
    /// The template's raw membership list is deduplicated here, preserving
    /// first-seen order; a group never appears twice no matter how often
    /// the directory reports it.
    pub fn assemble(
        input: NewUserInput,
        domain: &str,
        convention: WeekdayConvention,
        manager: &TemplateUserSnapshot,
        template: TemplateUserSnapshot,
    ) -> Self {
        let mut groups: Vec<GroupId> = Vec::with_capacity(template.member_of.len());
        for group in &template.member_of {
            if !groups.contains(group) {
                groups.push(group.clone());
            }
        }

        Self {
            start_date: input.effective_start_date(),
            given_name: input.given_name,
            surname: input.surname,
            title: input.title,
            mobile: input.mobile,
            convention,
            domain: domain.to_string(),
            manager_dn: manager.distinguished_name.clone(),
            template,
            groups,
        }
    }

    pub fn sam_account_name(&self) -> String {
        derive::sam_account_name(&self.given_name, &self.surname)
    }

    pub fn user_principal_name(&self) -> String {
        derive::principal_name(&self.sam_account_name(), &self.domain)
    }

    pub fn full_name(&self) -> String {
        derive::full_name(&self.given_name, &self.surname)
    }

    pub fn display_name(&self) -> String {
        derive::display_name(&self.given_name, &self.surname)
    }

    pub fn start_day(&self) -> &'static str {
        crate::calendar::weekday_name(self.start_date, self.convention)
    }

    pub fn password(&self) -> String {
        derive::password(self.start_date, self.convention)
    }

    /// Container the new entry is created under: the template user's own
    /// parent container.
    pub fn container(&self) -> OnboardResult<String> {
        dn::parent_container(&self.template.distinguished_name)
    }

    /// Full DN of the new entry: the template's DN with the leading RDN
    /// replaced by the new account name.
    pub fn distinguished_name(&self) -> OnboardResult<String> {
        dn::with_leading_cn(&self.template.distinguished_name, &self.sam_account_name())
    }

    /// Deduplicated groups to copy onto the new account.
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    /// Build the creation request handed to the write adapter.
    ///
    /// Title doubles as the description, and company/department are copied
    /// from the template user, matching the attribute set the original
    /// workflow wrote.
    pub fn create_request(&self) -> OnboardResult<CreateUserRequest> {
        let mut attributes = BTreeMap::new();
        attributes.insert("description".to_string(), self.title.clone());
        attributes.insert("displayName".to_string(), self.display_name());
        attributes.insert("manager".to_string(), self.manager_dn.clone());
        attributes.insert("mobile".to_string(), self.mobile.clone());
        attributes.insert("title".to_string(), self.title.clone());
        attributes.insert("userPrincipalName".to_string(), self.user_principal_name());
        attributes.insert("company".to_string(), self.template.company.clone());
        attributes.insert("department".to_string(), self.template.department.clone());

        Ok(CreateUserRequest {
            account_name: self.sam_account_name(),
            container: self.container()?,
            common_name: self.sam_account_name(),
            given_name: self.given_name.clone(),
            surname: self.surname.clone(),
            password: self.password(),
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(dn: &str, groups: &[&str]) -> TemplateUserSnapshot {
        TemplateUserSnapshot {
            distinguished_name: dn.to_string(),
            sam_account_name: "tmpl.user".to_string(),
            display_name: "User, Tmpl".to_string(),
            title: "Engineer".to_string(),
            description: "Engineer".to_string(),
            department: "Engineering".to_string(),
            company: "Example Ltd".to_string(),
            member_of: groups.iter().map(|g| GroupId(g.to_string())).collect(),
        }
    }

    fn input() -> NewUserInput {
        NewUserInput {
            given_name: "jane".to_string(),
            surname: "doe".to_string(),
            template_username: "tmpl.user".to_string(),
            manager_username: "boss.person".to_string(),
            mobile: "07700900000".to_string(),
            title: "Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 11),
        }
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let mut bad = input();
        bad.surname = "  ".to_string();
        let err = bad.validate().unwrap_err();
        assert!(matches!(err, OnboardError::InputInvalid { .. }));
        assert!(err.to_string().contains("last name"));
    }

    #[test]
    fn validate_accepts_complete_input() {
        input().validate().unwrap();
    }

    #[test]
    fn derivations_match_the_known_vector() {
        let manager = snapshot("CN=boss.person,OU=Staff,DC=example,DC=com", &[]);
        let template = snapshot("CN=tmpl.user,OU=Staff,DC=example,DC=com", &[]);
        let record = NewUserRecord::assemble(
            input(),
            "example.com",
            WeekdayConvention::MondayFirst,
            &manager,
            template,
        );

        assert_eq!(record.sam_account_name(), "jane.doe");
        assert_eq!(record.user_principal_name(), "jane.doe@example.com");
        assert_eq!(record.full_name(), "Jane Doe");
        assert_eq!(record.display_name(), "Doe, Jane");
        assert_eq!(record.start_day(), "Monday");
        assert_eq!(record.password(), "Monday11032024!");
        assert_eq!(record.container().unwrap(), "OU=Staff,DC=example,DC=com");
        assert_eq!(
            record.distinguished_name().unwrap(),
            "CN=jane.doe,OU=Staff,DC=example,DC=com"
        );
    }

    #[test]
    fn duplicate_template_groups_are_dropped() {
        let manager = snapshot("CN=boss,OU=Staff,DC=example,DC=com", &[]);
        let template = snapshot(
            "CN=tmpl.user,OU=Staff,DC=example,DC=com",
            &["CN=staff", "CN=vpn", "CN=staff"],
        );
        let record = NewUserRecord::assemble(
            input(),
            "example.com",
            WeekdayConvention::MondayFirst,
            &manager,
            template,
        );
        let names: Vec<&str> = record.groups().iter().map(GroupId::as_str).collect();
        assert_eq!(names, vec!["CN=staff", "CN=vpn"]);
    }

    #[test]
    fn create_request_carries_the_copied_attributes() {
        let manager = snapshot("CN=boss.person,OU=Mgmt,DC=example,DC=com", &[]);
        let template = snapshot("CN=tmpl.user,OU=Staff,DC=example,DC=com", &[]);
        let record = NewUserRecord::assemble(
            input(),
            "example.com",
            WeekdayConvention::MondayFirst,
            &manager,
            template,
        );
        let request = record.create_request().unwrap();

        assert_eq!(request.account_name, "jane.doe");
        assert_eq!(request.container, "OU=Staff,DC=example,DC=com");
        assert_eq!(request.password, "Monday11032024!");
        assert_eq!(
            request.attributes.get("manager").map(String::as_str),
            Some("CN=boss.person,OU=Mgmt,DC=example,DC=com")
        );
        assert_eq!(
            request.attributes.get("company").map(String::as_str),
            Some("Example Ltd")
        );
        assert_eq!(
            request.attributes.get("userPrincipalName").map(String::as_str),
            Some("jane.doe@example.com")
        );
    }

    #[test]
    fn start_date_defaults_to_today() {
        let mut unset = input();
        unset.start_date = None;
        assert_eq!(unset.effective_start_date(), Local::now().date_naive());
    }
}
