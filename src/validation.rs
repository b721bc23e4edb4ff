//! Submit-time validation of registration fields.
//!
//! Checks the form before submission and reports every problem at once:
//! - Blank name
//! - Malformed email address
//! - No activity selected
//! - Credit card number, zip code and CVV shape (credit card payment only)

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::events::FormField;
use crate::form::PaymentMethod;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Field values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub payment: PaymentMethod,
    pub card_number: String,
    pub zip: String,
    pub cvv: String,
}

impl Submission {
    /// Creates a submission with the given name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Sets the payment method.
    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    /// Sets credit card details.
    pub fn with_card(
        mut self,
        number: impl Into<String>,
        zip: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        self.card_number = number.into();
        self.zip = zip.into();
        self.cvv = cvv.into();
        self
    }
}

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingName,
    InvalidEmail,
    NoActivitySelected,
    InvalidCardNumber,
    InvalidZip,
    InvalidCvv,
}

impl ValidationErrorKind {
    /// Form field the error should be shown on.
    pub fn field(&self) -> FormField {
        match self {
            ValidationErrorKind::MissingName => FormField::Name,
            ValidationErrorKind::InvalidEmail => FormField::Email,
            ValidationErrorKind::NoActivitySelected => FormField::Activities,
            ValidationErrorKind::InvalidCardNumber => FormField::CardNumber,
            ValidationErrorKind::InvalidZip => FormField::Zip,
            ValidationErrorKind::InvalidCvv => FormField::Cvv,
        }
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn field(&self) -> FormField {
        self.kind.field()
    }
}

static EMAIL: OnceLock<Regex> = OnceLock::new();
static CARD_NUMBER: OnceLock<Regex> = OnceLock::new();
static ZIP: OnceLock<Regex> = OnceLock::new();
static CVV: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("validation pattern is a valid regex"))
}

/// Fields checked for a submission with the given payment method.
pub fn checked_fields(payment: PaymentMethod) -> Vec<FormField> {
    let mut fields = vec![FormField::Name, FormField::Email, FormField::Activities];
    if payment == PaymentMethod::CreditCard {
        fields.extend([FormField::CardNumber, FormField::Zip, FormField::Cvv]);
    }
    fields
}

/// Validates a submission.
///
/// Checks:
/// 1. Name is not blank
/// 2. Email looks like `local@domain.tld`
/// 3. At least one activity is selected
/// 4. For credit card payment: 13–16 digit card number, 5 digit zip, 3 digit CVV
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
///
/// # Example
///
/// ```
/// use registration_schedule::validation::{validate_submission, Submission};
/// use registration_schedule::form::PaymentMethod;
///
/// let form = Submission::new("Ada", "ada@example.com").with_payment(PaymentMethod::Paypal);
/// assert!(validate_submission(&form, 1).is_ok());
/// assert!(validate_submission(&form, 0).is_err());
/// ```
pub fn validate_submission(submission: &Submission, activities_selected: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if submission.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingName,
            "Please enter your name",
        ));
    }

    if !pattern(&EMAIL, r"(?i)^[^@\s]+@[^@\s]+\.[a-z]+$").is_match(submission.email.trim()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidEmail,
            format!("Invalid email address: {:?}", submission.email),
        ));
    }

    if activities_selected == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoActivitySelected,
            "Please select at least one activity",
        ));
    }

    if submission.payment == PaymentMethod::CreditCard {
        if !pattern(&CARD_NUMBER, r"^\d{13,16}$").is_match(submission.card_number.trim()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCardNumber,
                "Card number must be between 13 and 16 digits",
            ));
        }
        if !pattern(&ZIP, r"^\d{5}$").is_match(submission.zip.trim()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidZip,
                "Zip code must be 5 digits",
            ));
        }
        if !pattern(&CVV, r"^\d{3}$").is_match(submission.cvv.trim()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCvv,
                "CVV must be 3 digits",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card_submission() -> Submission {
        Submission::new("Grace Hopper", "grace@navy.mil").with_card("4111111111111111", "12345", "123")
    }

    #[test]
    fn test_valid_submission() {
        assert!(validate_submission(&valid_card_submission(), 2).is_ok());
    }

    #[test]
    fn test_missing_name() {
        let form = Submission {
            name: "   ".into(),
            ..valid_card_submission()
        };
        let errors = validate_submission(&form, 1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingName);
        assert_eq!(errors[0].field(), FormField::Name);
    }

    #[test]
    fn test_invalid_email() {
        for email in ["", "grace", "grace@navy", "gr ace@navy.mil", "@navy.mil"] {
            let form = Submission {
                email: email.into(),
                ..valid_card_submission()
            };
            let errors = validate_submission(&form, 1).unwrap_err();
            assert!(
                errors.iter().any(|e| e.kind == ValidationErrorKind::InvalidEmail),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn test_no_activity_selected() {
        let errors = validate_submission(&valid_card_submission(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoActivitySelected));
    }

    #[test]
    fn test_card_fields() {
        let form = valid_card_submission().with_card("4111", "1234", "12a");
        let errors = validate_submission(&form, 1).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidCardNumber,
                ValidationErrorKind::InvalidZip,
                ValidationErrorKind::InvalidCvv
            ]
        );
    }

    #[test]
    fn test_card_fields_ignored_for_other_payment() {
        let form = Submission::new("Grace", "grace@navy.mil").with_payment(PaymentMethod::Bitcoin);
        assert!(validate_submission(&form, 1).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_submission(&Submission::default(), 0).unwrap_err();
        // name, email, activities, card number, zip, cvv
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_checked_fields() {
        assert_eq!(checked_fields(PaymentMethod::Paypal).len(), 3);
        assert!(checked_fields(PaymentMethod::CreditCard).contains(&FormField::Cvv));
    }
}
