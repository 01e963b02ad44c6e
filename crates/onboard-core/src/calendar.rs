//! Weekday naming for the start-date password.
//!
//! The legacy provisioning scripts disagreed on where the week starts:
//! some revisions indexed a Monday-first name table, others relabeled the
//! table to start at Sunday without reindexing, which shifts every derived
//! name (and therefore every generated password) back by one day. Rather
//! than silently picking one, the convention is an explicit configuration
//! choice carried through the whole run.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const MONDAY_FIRST: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const SUNDAY_FIRST: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Which week-start ordering is used when naming the start day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekdayConvention {
    /// Monday-first table; yields the true weekday name.
    #[default]
    MondayFirst,
    /// Sunday-first table indexed with a Monday-based day number.
    /// Reproduces the older script revisions: every name comes out one
    /// day earlier than the calendar weekday.
    SundayFirst,
}

impl WeekdayConvention {
    /// Parse the operator-facing spelling (`monday` / `sunday`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "monday" | "monday-first" => Some(Self::MondayFirst),
            "sunday" | "sunday-first" => Some(Self::SundayFirst),
            _ => None,
        }
    }
}

/// Name the weekday of `date` under the given convention.
///
/// Total over all valid calendar dates; `NaiveDate` already rules out
/// structurally invalid day/month/year combinations.
pub fn weekday_name(date: NaiveDate, convention: WeekdayConvention) -> &'static str {
    let index = date.weekday().num_days_from_monday() as usize;
    match convention {
        WeekdayConvention::MondayFirst => MONDAY_FIRST[index],
        WeekdayConvention::SundayFirst => SUNDAY_FIRST[index],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_first_names_the_true_weekday() {
        // 2024-03-11 is a Monday.
        assert_eq!(
            weekday_name(date(2024, 3, 11), WeekdayConvention::MondayFirst),
            "Monday"
        );
        assert_eq!(
            weekday_name(date(2024, 3, 15), WeekdayConvention::MondayFirst),
            "Friday"
        );
        assert_eq!(
            weekday_name(date(2024, 3, 17), WeekdayConvention::MondayFirst),
            "Sunday"
        );
    }

    #[test]
    fn sunday_first_shifts_every_name_back_by_one() {
        assert_eq!(
            weekday_name(date(2024, 3, 11), WeekdayConvention::SundayFirst),
            "Sunday"
        );
        assert_eq!(
            weekday_name(date(2024, 3, 16), WeekdayConvention::SundayFirst),
            "Friday"
        );
    }

    #[test]
    fn parse_accepts_both_spellings() {
        assert_eq!(
            WeekdayConvention::parse("Monday"),
            Some(WeekdayConvention::MondayFirst)
        );
        assert_eq!(
            WeekdayConvention::parse("sunday-first"),
            Some(WeekdayConvention::SundayFirst)
        );
        assert_eq!(WeekdayConvention::parse("midweek"), None);
    }
}
