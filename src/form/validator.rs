// SPDX-License-Identifier: MPL-2.0
//! Validation rules for the contact form.
//!
//! Every rule produces an optional human-readable message; `None` means the
//! field passes. The whole-form [`validate`] applies, per field, the presence
//! check first and the pattern/length/custom check second, and surfaces all
//! simultaneous failures rather than stopping at the first one.

use crate::form::fields::{ContactMethod, Field, FormValues, Submission};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum accepted comment length, in characters.
pub const COMMENT_MAX_CHARS: usize = 400;

/// Four groups of two digits, optionally separated by `-`, `.` or whitespace,
/// e.g. "71 90 75 48" or "71-90-75-48".
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}[-.\s]?){3}\d{2}$").unwrap());

/// Pragmatic local@domain.tld shape check, not an RFC 5322 parser.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

const MSG_REQUIRED: &str = "This field is required";
const MSG_KASPER: &str = "Oh no... not you again.";
const MSG_PHONE: &str = "Invalid phone number";
const MSG_EMAIL: &str = "Invalid email address";
const MSG_COMMENT_TOO_LONG: &str = "Comment is too long";

/// Per-field validation messages. A message is present only while the field
/// fails its constraint; the component clears entries field-by-field as the
/// user corrects input and wholesale on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
    pub contact_method: Option<String>,
}

impl ValidationErrors {
    /// Returns true if any field currently has a message.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.full_name.is_some()
            || self.phone_number.is_some()
            || self.email.is_some()
            || self.comment.is_some()
            || self.contact_method.is_some()
    }

    /// Returns the message for a free-text field, if any.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&String> {
        match field {
            Field::FullName => self.full_name.as_ref(),
            Field::PhoneNumber => self.phone_number.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Comment => self.comment.as_ref(),
        }
    }

    /// Replaces the message for a free-text field.
    pub fn set_message(&mut self, field: Field, message: Option<String>) {
        match field {
            Field::FullName => self.full_name = message,
            Field::PhoneNumber => self.phone_number = message,
            Field::Email => self.email = message,
            Field::Comment => self.comment = message,
        }
    }
}

/// Validates the full name. The "kasper" rejection is a deliberate
/// easter-egg constraint: it is checked independently of the presence check
/// and only applies to non-empty values (required wins on an empty field).
#[must_use]
pub fn validate_full_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    if value.contains("kasper") {
        return Some(MSG_KASPER.to_string());
    }
    None
}

/// Validates the phone number against the 2-2-2-2 digit grouping.
#[must_use]
pub fn validate_phone_number(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    if !PHONE_PATTERN.is_match(value) {
        return Some(MSG_PHONE.to_string());
    }
    None
}

/// Validates the email address shape.
#[must_use]
pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(MSG_EMAIL.to_string());
    }
    None
}

/// Validates the comment: required, capped at [`COMMENT_MAX_CHARS`].
#[must_use]
pub fn validate_comment(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    if value.chars().count() > COMMENT_MAX_CHARS {
        return Some(MSG_COMMENT_TOO_LONG.to_string());
    }
    None
}

/// Validates that a contact method has been selected.
#[must_use]
pub fn validate_contact_method(value: Option<ContactMethod>) -> Option<String> {
    if value.is_none() {
        return Some(MSG_REQUIRED.to_string());
    }
    None
}

/// Re-runs the rule for a single free-text field. Used by the editing path
/// to clear or replace one message without touching the others.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    match field {
        Field::FullName => validate_full_name(value),
        Field::PhoneNumber => validate_phone_number(value),
        Field::Email => validate_email(value),
        Field::Comment => validate_comment(value),
    }
}

/// Validates the whole record. On success the returned [`Submission`] is the
/// frozen copy of the input; on failure every failing field carries its own
/// message. Partial validity never produces a `Submission`.
pub fn validate(values: &FormValues) -> Result<Submission, ValidationErrors> {
    let errors = ValidationErrors {
        full_name: validate_full_name(&values.full_name),
        phone_number: validate_phone_number(&values.phone_number),
        email: validate_email(&values.email),
        comment: validate_comment(&values.comment),
        contact_method: validate_contact_method(values.contact_method),
    };

    match values.contact_method {
        Some(contact_method) if !errors.has_errors() => Ok(Submission {
            full_name: values.full_name.clone(),
            phone_number: values.phone_number.clone(),
            email: values.email.clone(),
            comment: values.comment.clone(),
            contact_method,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            full_name: "Ada Lovelace".to_string(),
            phone_number: "71 90 75 48".to_string(),
            email: "ada@example.com".to_string(),
            comment: "Please call me back.".to_string(),
            contact_method: Some(ContactMethod::Phone),
        }
    }

    #[test]
    fn valid_record_passes_and_freezes_the_data() {
        let values = valid_values();
        let submission = validate(&values).expect("record should validate");

        assert_eq!(submission.full_name, values.full_name);
        assert_eq!(submission.phone_number, values.phone_number);
        assert_eq!(submission.email, values.email);
        assert_eq!(submission.comment, values.comment);
        assert_eq!(submission.contact_method, ContactMethod::Phone);
    }

    #[test]
    fn empty_full_name_fails_with_required_message() {
        let mut values = valid_values();
        values.full_name.clear();

        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.full_name.as_deref(), Some(MSG_REQUIRED));
        assert!(errors.phone_number.is_none());
        assert!(errors.email.is_none());
    }

    #[test]
    fn kasper_in_full_name_triggers_the_easter_egg() {
        let mut values = valid_values();
        values.full_name = "kasper rules".to_string();

        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.full_name.as_deref(), Some(MSG_KASPER));
    }

    #[test]
    fn kasper_check_is_case_sensitive() {
        assert!(validate_full_name("Kasper Hansen").is_none());
        assert_eq!(
            validate_full_name("mr kasper").as_deref(),
            Some(MSG_KASPER)
        );
    }

    #[test]
    fn required_takes_precedence_over_the_easter_egg() {
        // An empty field reports "required", never the substring message.
        assert_eq!(validate_full_name("").as_deref(), Some(MSG_REQUIRED));
    }

    #[test]
    fn phone_accepts_all_separator_styles() {
        assert!(validate_phone_number("71 90 75 48").is_none());
        assert!(validate_phone_number("71-90-75-48").is_none());
        assert!(validate_phone_number("71.90.75.48").is_none());
        assert!(validate_phone_number("71907548").is_none());
        // Mixed separators are fine too.
        assert!(validate_phone_number("71-90 75.48").is_none());
    }

    #[test]
    fn phone_rejects_other_arrangements() {
        assert_eq!(
            validate_phone_number("123456789").as_deref(),
            Some(MSG_PHONE)
        );
        assert_eq!(
            validate_phone_number("7190754").as_deref(),
            Some(MSG_PHONE)
        );
        assert_eq!(
            validate_phone_number("719 07 548").as_deref(),
            Some(MSG_PHONE)
        );
        assert_eq!(
            validate_phone_number("ab cd ef gh").as_deref(),
            Some(MSG_PHONE)
        );
    }

    #[test]
    fn email_shape_check() {
        assert!(validate_email("test@email.com").is_none());
        assert!(validate_email("first.last+tag@sub.domain.org").is_none());

        assert_eq!(validate_email("no-at-sign").as_deref(), Some(MSG_EMAIL));
        assert_eq!(validate_email("a@nodot").as_deref(), Some(MSG_EMAIL));
        assert_eq!(validate_email("a@domain.x").as_deref(), Some(MSG_EMAIL));
        assert_eq!(validate_email("@domain.com").as_deref(), Some(MSG_EMAIL));
    }

    #[test]
    fn comment_length_cap() {
        assert!(validate_comment("short").is_none());
        assert!(validate_comment(&"x".repeat(COMMENT_MAX_CHARS)).is_none());
        assert_eq!(
            validate_comment(&"x".repeat(COMMENT_MAX_CHARS + 1)).as_deref(),
            Some(MSG_COMMENT_TOO_LONG)
        );
        assert_eq!(validate_comment("").as_deref(), Some(MSG_REQUIRED));
    }

    #[test]
    fn contact_method_is_required() {
        assert_eq!(
            validate_contact_method(None).as_deref(),
            Some(MSG_REQUIRED)
        );
        assert!(validate_contact_method(Some(ContactMethod::Email)).is_none());
    }

    #[test]
    fn all_failures_are_surfaced_at_once() {
        let errors = validate(&FormValues::default()).unwrap_err();

        assert!(errors.full_name.is_some());
        assert!(errors.phone_number.is_some());
        assert!(errors.email.is_some());
        assert!(errors.comment.is_some());
        assert!(errors.contact_method.is_some());
    }

    #[test]
    fn test_values_always_validate() {
        // Regression guard on the sample data itself.
        assert!(validate(&FormValues::test_values()).is_ok());
    }

    #[test]
    fn message_accessors_route_by_field() {
        let mut errors = ValidationErrors::default();
        errors.set_message(Field::Email, Some(MSG_EMAIL.to_string()));

        assert_eq!(errors.message(Field::Email).map(String::as_str), Some(MSG_EMAIL));
        assert!(errors.message(Field::Comment).is_none());
        assert!(errors.has_errors());

        errors.set_message(Field::Email, None);
        assert!(!errors.has_errors());
    }
}
