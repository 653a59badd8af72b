//! Operator-facing alerts.
//!
//! Every failure surfaces to the operator as an alert: a severity, a
//! short title, and a human-readable message. The mapping from errors is
//! total, so callers never invent ad hoc dialog text. Validation
//! problems block the action with a warning; state conflicts and
//! rendering failures are errors. Nothing is retried and nothing is
//! fatal — an alert ends the current action and returns the operator to
//! an idle desk.

use crate::error::FrontDeskError;

/// How strongly an alert should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AlertSeverity::Info => "INFO",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Error => "ERROR",
        };
        write!(f, "{label}")
    }
}

/// A presentable alert. Rendering is up to the front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&FrontDeskError> for Alert {
    fn from(err: &FrontDeskError) -> Self {
        match err {
            FrontDeskError::EmptyQuery => Alert::warning("Search Error", err.to_string()),
            FrontDeskError::InvalidInput(_) | FrontDeskError::Text(_) => {
                Alert::warning("Input Error", err.to_string())
            }
            FrontDeskError::NoSelection | FrontDeskError::SelectionOutsideResults(_) => {
                Alert::warning("Selection Error", err.to_string())
            }
            FrontDeskError::RecordNotFound(_) => Alert::warning("No Results", err.to_string()),
            FrontDeskError::AlreadyCheckedIn(_) => {
                Alert::warning("Already Checked In", err.to_string())
            }
            FrontDeskError::DuplicateRecord(_) => Alert::error("Save Error", err.to_string()),
            FrontDeskError::SummaryRender(_) => Alert::error("Error", err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_warnings() {
        for err in [
            FrontDeskError::EmptyQuery,
            FrontDeskError::InvalidInput("bad id".into()),
            FrontDeskError::NoSelection,
            FrontDeskError::RecordNotFound("abc".into()),
            FrontDeskError::AlreadyCheckedIn("John Smith".into()),
        ] {
            let alert = Alert::from(&err);
            assert_eq!(alert.severity, AlertSeverity::Warning, "{err}");
            assert!(!alert.message.is_empty());
        }
    }

    #[test]
    fn store_conflicts_map_to_errors() {
        let err = FrontDeskError::DuplicateRecord("abc".into());
        let alert = Alert::from(&err);

        assert_eq!(alert.severity, AlertSeverity::Error);
        assert_eq!(alert.title, "Save Error");
    }

    #[test]
    fn empty_query_alert_uses_search_error_title() {
        let alert = Alert::from(&FrontDeskError::EmptyQuery);
        assert_eq!(alert.title, "Search Error");
        assert!(alert.message.contains("name or a date of birth"));
    }
}
