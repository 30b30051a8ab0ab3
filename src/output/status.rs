//! Condition summarization
//!
//! Catalog resources carry a condition history; display wants the most
//! recent entry, either as a one-word status or as a full line with
//! message and transition time.

use chrono::{DateTime, Utc};

use crate::models::ServiceCondition;

/// The most recent condition, which the catalog controller appends last.
pub fn last_condition(conditions: &[ServiceCondition]) -> Option<&ServiceCondition> {
    conditions.last()
}

/// One-word status for list columns, e.g. "Ready".
pub fn status_short(conditions: &[ServiceCondition]) -> String {
    last_condition(conditions)
        .map(|cond| cond.type_.clone())
        .unwrap_or_default()
}

/// Full status line for details output:
/// "Ready - message @ 2024-01-01 00:00:00 UTC".
pub fn status_full(conditions: &[ServiceCondition]) -> String {
    let Some(cond) = last_condition(conditions) else {
        return String::new();
    };
    let mut line = cond.type_.clone();
    if let Some(message) = cond.message.as_deref().filter(|m| !m.is_empty()) {
        line.push_str(" - ");
        line.push_str(message);
    }
    if let Some(time) = cond.last_transition_time.as_deref().filter(|t| !t.is_empty()) {
        line.push_str(" @ ");
        line.push_str(&format_transition_time(time));
    }
    line
}

fn format_transition_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(type_: &str, message: Option<&str>, time: Option<&str>) -> ServiceCondition {
        ServiceCondition {
            type_: type_.to_string(),
            status: "True".to_string(),
            reason: None,
            message: message.map(|m| m.to_string()),
            last_transition_time: time.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_short_status_uses_latest_condition() {
        let conditions = vec![
            condition("Provisioning", None, None),
            condition("Ready", None, None),
        ];
        assert_eq!(status_short(&conditions), "Ready");
    }

    #[test]
    fn test_short_status_empty_history() {
        assert_eq!(status_short(&[]), "");
    }

    #[test]
    fn test_full_status_formats_message_and_time() {
        let conditions = vec![condition(
            "Ready",
            Some("injected bind result"),
            Some("2024-01-01T00:00:00Z"),
        )];
        assert_eq!(
            status_full(&conditions),
            "Ready - injected bind result @ 2024-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_full_status_skips_absent_parts() {
        let conditions = vec![condition("Ready", None, None)];
        assert_eq!(status_full(&conditions), "Ready");
    }

    #[test]
    fn test_unparseable_time_is_passed_through() {
        let conditions = vec![condition("Ready", None, Some("yesterday"))];
        assert_eq!(status_full(&conditions), "Ready @ yesterday");
    }
}
