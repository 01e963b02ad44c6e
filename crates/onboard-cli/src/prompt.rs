//! Sequential stdin prompts.
//!
//! The tool is prompt-driven like the workflow it replaces: no field has a
//! flag, the operator answers questions in order. Values are returned as
//! typed, and empty required fields are rejected by the core's validation
//! rather than re-prompted.

use std::io::{self, Write};

use chrono::NaiveDate;
use onboard_core::{OnboardError, OnboardResult};

/// Start dates are entered as `MMDDYYYY`.
pub const START_DATE_FORMAT: &str = "%m%d%Y";

/// Print `label: ` and read one trimmed line from stdin.
pub fn line(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

/// Parse an operator-entered start date. Blank means "unset" (the record
/// defaults it to today); anything else must match `MMDDYYYY`.
pub fn parse_start_date(value: &str) -> OnboardResult<Option<NaiveDate>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, START_DATE_FORMAT)
        .map(Some)
        .map_err(|_| OnboardError::InputInvalid {
            message: format!("start date {trimmed} does not match MMDDYYYY"),
        })
}

/// Prompt for the start date.
pub fn start_date(label: &str) -> anyhow::Result<Option<NaiveDate>> {
    let value = line(label)?;
    Ok(parse_start_date(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mmddyyyy() {
        assert_eq!(
            parse_start_date("03112024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 11)
        );
    }

    #[test]
    fn blank_means_unset() {
        assert_eq!(parse_start_date("").unwrap(), None);
        assert_eq!(parse_start_date("   ").unwrap(), None);
    }

    #[test]
    fn rejects_other_formats() {
        assert!(matches!(
            parse_start_date("2024-03-11"),
            Err(OnboardError::InputInvalid { .. })
        ));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_start_date("13452024").is_err());
    }
}
