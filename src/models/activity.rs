//! Activity (catalog entry) model.
//!
//! An activity is a selectable workshop or session on the registration
//! form. It carries a price and, usually, a day/time label from which its
//! occupied hour slots are derived.
//!
//! Activities without a label (e.g. the main conference) occupy no slots
//! and never conflict with anything.

use serde::{Deserialize, Serialize};

/// A selectable activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier (the checkbox name in markup).
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Day and time label, e.g. `"Tuesday 9am-12pm"`. `None` = untimed.
    #[serde(default, alias = "dayAndTime")]
    pub day_and_time: Option<String>,
    /// Price in whole currency units.
    pub cost: u32,
}

impl Activity {
    /// Creates an untimed, free activity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            day_and_time: None,
            cost: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the day/time label.
    pub fn with_day_and_time(mut self, label: impl Into<String>) -> Self {
        self.day_and_time = Some(label.into());
        self
    }

    /// Sets the cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_builder() {
        let act = Activity::new("js-frameworks")
            .with_name("JavaScript Frameworks Workshop")
            .with_day_and_time("Tuesday 9am-12pm")
            .with_cost(100);

        assert_eq!(act.id, "js-frameworks");
        assert_eq!(act.name, "JavaScript Frameworks Workshop");
        assert_eq!(act.day_and_time.as_deref(), Some("Tuesday 9am-12pm"));
        assert_eq!(act.cost, 100);
    }

    #[test]
    fn test_untimed_activity() {
        let act = Activity::new("all").with_cost(200);
        assert!(act.day_and_time.is_none());
    }

    #[test]
    fn test_deserialize_markup_attributes() {
        let json = r#"{"id": "node", "dayAndTime": "Tuesday 1pm-4pm", "cost": 100}"#;
        let act: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(act.day_and_time.as_deref(), Some("Tuesday 1pm-4pm"));
        assert!(act.name.is_empty());
    }
}
