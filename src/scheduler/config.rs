//! Controller configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::form::PaymentMethod;
use crate::state::BlockingPolicy;

/// Settings for a [`SchedulerController`](super::SchedulerController).
///
/// Every field has a default matching the stock registration page, so a
/// partial JSON object is enough to override one setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// How deselection releases blocked competitors.
    pub blocking_policy: BlockingPolicy,
    /// Job role value that reveals the free-text title field.
    pub other_role_value: String,
    /// Design value meaning "no design chosen yet".
    pub design_placeholder: String,
    /// Colour options offered per design.
    pub design_colors: BTreeMap<String, Vec<String>>,
    /// Payment panel shown at load.
    pub default_payment: PaymentMethod,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let mut design_colors = BTreeMap::new();
        design_colors.insert(
            "js puns".to_string(),
            vec!["cornflowerblue".into(), "darkslategrey".into(), "gold".into()],
        );
        design_colors.insert(
            "heart js".to_string(),
            vec!["tomato".into(), "steelblue".into(), "dimgrey".into()],
        );

        Self {
            blocking_policy: BlockingPolicy::default(),
            other_role_value: "other".to_string(),
            design_placeholder: "select".to_string(),
            design_colors,
            default_payment: PaymentMethod::default(),
        }
    }
}

impl ControllerConfig {
    /// Parses a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the blocking policy.
    pub fn with_blocking_policy(mut self, policy: BlockingPolicy) -> Self {
        self.blocking_policy = policy;
        self
    }

    /// Sets the colour palette offered for a design.
    pub fn with_design_colors(
        mut self,
        design: impl Into<String>,
        colors: Vec<String>,
    ) -> Self {
        self.design_colors.insert(design.into(), colors);
        self
    }

    /// Sets the payment panel shown at load.
    pub fn with_default_payment(mut self, payment: PaymentMethod) -> Self {
        self.default_payment = payment;
        self
    }
}
