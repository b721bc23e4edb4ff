//! Crate error type.

use thiserror::Error;

/// Errors produced while parsing catalog data or handling form events.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A day/time label could not be parsed.
    #[error("malformed day/time label {label:?}: {reason}")]
    Format { label: String, reason: String },

    /// An event referenced an activity that is not in the catalog.
    #[error("unknown activity id: {0:?}")]
    NotFound(String),

    /// Two catalog entries share the same id.
    #[error("duplicate activity id: {0:?}")]
    DuplicateActivity(String),

    /// The activity cannot be selected while another selection overlaps it.
    #[error("activity {activity_id:?} is blocked by {blocked_by:?}")]
    Blocked {
        activity_id: String,
        blocked_by: Vec<String>,
    },

    /// The payment select reported a value with no matching panel.
    #[error("unknown payment method: {0:?}")]
    UnknownPaymentMethod(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScheduleError {
    pub(crate) fn format(label: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}
