//! Pure attribute derivations for a new account.
//!
//! Each derivation is a standalone function of its inputs so it can be
//! tested in isolation; [`crate::models::new_user::NewUserRecord`] methods
//! delegate here.

use chrono::NaiveDate;

use crate::calendar::{WeekdayConvention, weekday_name};

/// Trailing character appended to generated passwords so they satisfy the
/// domain complexity policy.
const PASSWORD_SUFFIX: char = '!';

/// `lowercase(given).lowercase(surname)` — the short logon identifier.
///
/// Deterministic: the same name pair always yields the same identifier.
pub fn sam_account_name(given_name: &str, surname: &str) -> String {
    format!(
        "{}.{}",
        given_name.to_lowercase(),
        surname.to_lowercase()
    )
}

/// `account@domain` logon identifier.
pub fn principal_name(sam_account_name: &str, domain: &str) -> String {
    format!("{sam_account_name}@{domain}")
}

/// Capitalized `Given Surname`.
pub fn full_name(given_name: &str, surname: &str) -> String {
    format!("{} {}", capitalize(given_name), capitalize(surname))
}

/// Capitalized `Surname, Given`, used as the account's display name.
pub fn display_name(given_name: &str, surname: &str) -> String {
    format!("{}, {}", capitalize(surname), capitalize(given_name))
}

/// Initial password: `<WeekdayName><DDMMYYYY>!`.
///
/// A pure function of the start date and the active weekday convention,
/// with no randomness. The predictability is a known weakness preserved
/// from the original workflow: the operator communicates this password to
/// the new starter out of band and expects to re-derive it from the start
/// date alone.
pub fn password(start_date: NaiveDate, convention: WeekdayConvention) -> String {
    format!(
        "{}{}{}",
        weekday_name(start_date, convention),
        start_date.format("%d%m%Y"),
        PASSWORD_SUFFIX
    )
}

/// First character uppercased, the rest lowercased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sam_account_name_is_lowercased_and_dotted() {
        assert_eq!(sam_account_name("jane", "doe"), "jane.doe");
        assert_eq!(sam_account_name("JANE", "Doe"), "jane.doe");
    }

    #[test]
    fn sam_account_name_is_stable() {
        let first = sam_account_name("Miguel", "O'Neill");
        let second = sam_account_name("Miguel", "O'Neill");
        assert_eq!(first, second);
    }

    #[test]
    fn principal_name_appends_domain() {
        assert_eq!(
            principal_name("jane.doe", "example.com"),
            "jane.doe@example.com"
        );
    }

    #[test]
    fn names_are_capitalized() {
        assert_eq!(full_name("jane", "doe"), "Jane Doe");
        assert_eq!(display_name("jANE", "dOE"), "Doe, Jane");
        assert_eq!(full_name("", "doe"), " Doe");
    }

    #[test]
    fn password_matches_known_vector() {
        // 2024-03-11 is a Monday.
        assert_eq!(
            password(date(2024, 3, 11), WeekdayConvention::MondayFirst),
            "Monday11032024!"
        );
    }

    #[test]
    fn password_is_deterministic_per_date() {
        let d = date(2025, 12, 1);
        assert_eq!(
            password(d, WeekdayConvention::MondayFirst),
            password(d, WeekdayConvention::MondayFirst)
        );
    }

    #[test]
    fn password_follows_the_active_convention() {
        assert_eq!(
            password(date(2024, 3, 11), WeekdayConvention::SundayFirst),
            "Sunday11032024!"
        );
    }
}
