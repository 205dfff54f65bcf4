//! Append-only audit trail
//!
//! Every mutating portal operation emits one line through the logger in the
//! form `{timestamp} - {actor} - {action} - {input} - {outcome}`. Nothing in
//! the portal reads the trail back; it exists for administrators.

use chrono::{Local, NaiveDateTime};

/// Outcome string recorded for operations that completed normally
pub const SUCCESS: &str = "SUCCESS";

/// Current local timestamp, the instant recorded in audit lines
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format a single audit line
#[must_use]
pub fn format_action(
    at: NaiveDateTime,
    actor: &str,
    action: &str,
    input: &str,
    outcome: &str,
) -> String {
    format!(
        "{} - {actor} - {action} - {input} - {outcome}",
        at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Record an action in the audit trail at info level
pub fn log_action(actor: &str, action: &str, input: &str, outcome: &str) {
    logger::info!("{}", format_action(now(), actor, action, input, outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_action_layout() {
        let at = NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let line = format_action(
            at,
            "student1@hindeburg.ac.uk",
            "addCourseToStudentTimetable",
            "CSE1001",
            SUCCESS,
        );
        assert_eq!(
            line,
            "2025-05-01 09:30:00 - student1@hindeburg.ac.uk - addCourseToStudentTimetable - CSE1001 - SUCCESS"
        );
    }

    #[test]
    fn test_log_action_does_not_panic() {
        log_action("Guest", "consultFAQ", "-", SUCCESS);
    }
}
