//! Conditional field handlers.
//!
//! Show/hide and option-filtering rules for the non-activity parts of the
//! form:
//! - the "other" job title field follows the job role select,
//! - the t-shirt colour select follows the design select,
//! - exactly one payment panel is visible, matching the payment select.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::events::{FormField, Instruction};
use crate::scheduler::ControllerConfig;

/// Payment methods offered on the form.
///
/// Serialized with the same value the payment select reports, so JSON and
/// [`FromStr`] agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "credit card")]
    CreditCard,
    #[serde(rename = "paypal")]
    Paypal,
    #[serde(rename = "bitcoin")]
    Bitcoin,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Paypal,
        PaymentMethod::Bitcoin,
    ];

    /// Panel holding this method's fields or instructions.
    pub fn panel(&self) -> FormField {
        match self {
            PaymentMethod::CreditCard => FormField::CreditCard,
            PaymentMethod::Paypal => FormField::Paypal,
            PaymentMethod::Bitcoin => FormField::Bitcoin,
        }
    }

    /// Select option value.
    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Bitcoin => "bitcoin",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for PaymentMethod {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        PaymentMethod::ALL
            .iter()
            .copied()
            .find(|m| m.value() == normalized)
            .ok_or_else(|| ScheduleError::UnknownPaymentMethod(s.to_string()))
    }
}

/// Job role changed: reveal and focus the free-text title for "other",
/// hide it otherwise.
pub fn job_role_changed(role: &str, config: &ControllerConfig) -> Vec<Instruction> {
    if role == config.other_role_value {
        vec![
            Instruction::show(FormField::OtherTitle),
            Instruction::Focus(FormField::OtherTitle),
        ]
    } else {
        vec![Instruction::hide(FormField::OtherTitle)]
    }
}

/// Design changed: hide colours for the placeholder, otherwise show them and
/// narrow the colour options when the design has a configured palette.
pub fn design_changed(design: &str, config: &ControllerConfig) -> Vec<Instruction> {
    if design == config.design_placeholder {
        return vec![Instruction::hide(FormField::ShirtColors)];
    }

    let mut out = vec![Instruction::show(FormField::ShirtColors)];
    if let Some(colors) = config.design_colors.get(design) {
        out.push(Instruction::FilterOptions {
            field: FormField::Color,
            visible: colors.clone(),
        });
    }
    out
}

/// Payment method changed: show the chosen panel, hide the others.
pub fn payment_changed(method: PaymentMethod) -> Vec<Instruction> {
    PaymentMethod::ALL
        .iter()
        .map(|m| Instruction::SetVisible {
            field: m.panel(),
            visible: *m == method,
        })
        .collect()
}
