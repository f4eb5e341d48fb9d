//! JSON reports written to stdout.

use serde::Serialize;

use crate::error::Error;
use crate::outcome::ReconcileOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub result: &'static str,
}

/// Report for a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Report {
    /// Check mode: validated, nothing queried, nothing changed.
    pub fn check_mode() -> Self {
        Self {
            changed: false,
            meta: None,
        }
    }
}

impl From<ReconcileOutcome> for Report {
    fn from(outcome: ReconcileOutcome) -> Self {
        Self {
            changed: outcome.changed(),
            meta: Some(Meta {
                result: outcome.result(),
            }),
        }
    }
}

/// Report for a fatal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub failed: bool,
    pub msg: String,
}

impl FailureReport {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
        }
    }
}

impl From<&Error> for FailureReport {
    fn from(err: &Error) -> Self {
        Self::new(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::SkipReason;
    use serde_json::json;

    #[test]
    fn test_outcome_reports() {
        let restarted = serde_json::to_value(Report::from(ReconcileOutcome::Restarted)).unwrap();
        assert_eq!(restarted, json!({"changed": true, "meta": {"result": "success"}}));

        let skipped = serde_json::to_value(Report::from(ReconcileOutcome::Skipped(
            SkipReason::NotOnThisNode,
        )))
        .unwrap();
        assert_eq!(skipped, json!({"changed": false, "meta": {"result": "skipping"}}));

        let ok = serde_json::to_value(Report::from(ReconcileOutcome::Ok)).unwrap();
        assert_eq!(ok, json!({"changed": false, "meta": {"result": "ok"}}));
    }

    #[test]
    fn test_check_mode_report() {
        let value = serde_json::to_value(Report::check_mode()).unwrap();
        assert_eq!(value, json!({"changed": false}));
    }

    #[test]
    fn test_failure_report() {
        let err = Error::InvalidEngine("lxc".to_string());
        let value = serde_json::to_value(FailureReport::from(&err)).unwrap();
        assert_eq!(
            value,
            json!({"failed": true, "msg": "Invalid container engine: lxc"})
        );
    }
}
