//! Inbound form events and outbound presentation instructions.
//!
//! Every user action on the form is one [`FormEvent`] variant. Handlers never
//! touch the page; they return [`Instruction`]s for the presentation layer
//! to apply, in order.

use serde::{Deserialize, Serialize};

use crate::validation::Submission;

/// Form controls the controller can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    /// Free-text job title, shown when the job role is "other".
    OtherTitle,
    /// Container of the t-shirt colour select.
    ShirtColors,
    /// T-shirt colour select.
    Color,
    /// Activity checkbox group.
    Activities,
    /// Credit card panel.
    CreditCard,
    CardNumber,
    Zip,
    Cvv,
    /// PayPal panel.
    Paypal,
    /// Bitcoin panel.
    Bitcoin,
}

/// A user action on the registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormEvent {
    /// An activity checkbox changed.
    ActivityToggled { activity_id: String, checked: bool },
    /// The job role select changed.
    JobRoleChanged(String),
    /// The t-shirt design select changed.
    DesignChanged(String),
    /// The payment method select changed.
    PaymentChanged(String),
    /// The form was submitted.
    Submit(Submission),
}

/// An instruction for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Disable (and style as disabled) or re-enable an activity checkbox.
    SetBlocked { activity_id: String, blocked: bool },
    /// Update the total cost readout.
    SetRunningTotal(u32),
    /// Show or hide a field.
    SetVisible { field: FormField, visible: bool },
    /// Move keyboard focus to a field.
    Focus(FormField),
    /// Show only the listed options of a select; hide the rest.
    FilterOptions { field: FormField, visible: Vec<String> },
    /// Flag a field as invalid with a message.
    MarkInvalid { field: FormField, message: String },
    /// Remove any invalid flag from a field.
    ClearInvalid(FormField),
    /// Validation passed; the form may be submitted.
    AcceptSubmission,
}

impl Instruction {
    pub fn show(field: FormField) -> Self {
        Instruction::SetVisible {
            field,
            visible: true,
        }
    }

    pub fn hide(field: FormField) -> Self {
        Instruction::SetVisible {
            field,
            visible: false,
        }
    }
}
