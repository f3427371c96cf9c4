// SPDX-License-Identifier: MPL-2.0
//! Field registry: the record backing the editable form and the frozen
//! record produced by a successful validation.

use std::fmt;

/// How the sender wants to be contacted. There is deliberately no `Default`
/// impl: the form starts with no method selected and the validator treats
/// `None` as a missing required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    /// All selectable methods, in display order.
    pub const ALL: [ContactMethod; 2] = [ContactMethod::Email, ContactMethod::Phone];

    /// Human-readable label shown in the method picker and the summary.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one of the free-text fields for per-field messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    PhoneNumber,
    Email,
    Comment,
}

impl Field {
    /// Label rendered above the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::PhoneNumber => "Phone Number",
            Field::Email => "Email",
            Field::Comment => "Comment",
        }
    }
}

/// Raw, editable form input. Everything is kept as the user typed it;
/// constraints are only applied by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub comment: String,
    pub contact_method: Option<ContactMethod>,
}

impl FormValues {
    /// Deterministic sample data for manual testing. Filling these values
    /// does not trigger validation; they are only checked on submit.
    ///
    /// The sample data must always satisfy every constraint; there is a
    /// regression test guarding exactly that.
    #[must_use]
    pub fn test_values() -> Self {
        Self {
            full_name: "Test Name".to_string(),
            phone_number: "71 90 75 48".to_string(),
            email: "test@email.com".to_string(),
            comment: "Test Comment".to_string(),
            contact_method: Some(ContactMethod::Email),
        }
    }

    /// Clears every field back to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the current text of a free-text field.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::Comment => &self.comment,
        }
    }

    /// Replaces the text of a free-text field.
    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Email => self.email = value,
            Field::Comment => self.comment = value,
        }
    }

    /// True when every field is at its initial empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.phone_number.is_empty()
            && self.email.is_empty()
            && self.comment.is_empty()
            && self.contact_method.is_none()
    }
}

/// A validated, frozen submission. Produced only by the validator; the
/// state machine stores it as the summary payload after the send delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub comment: String,
    pub contact_method: ContactMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_empty() {
        let values = FormValues::default();
        assert!(values.is_empty());
        assert!(values.contact_method.is_none());
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut values = FormValues::test_values();
        assert!(!values.is_empty());

        values.reset();
        assert!(values.is_empty());
    }

    #[test]
    fn set_text_routes_to_the_right_field() {
        let mut values = FormValues::default();
        values.set_text(Field::Email, "a@b.com".to_string());

        assert_eq!(values.email, "a@b.com");
        assert!(values.full_name.is_empty());
        assert_eq!(values.text(Field::Email), "a@b.com");
    }

    #[test]
    fn contact_method_labels() {
        assert_eq!(ContactMethod::Email.label(), "Email");
        assert_eq!(ContactMethod::Phone.label(), "Phone");
        assert_eq!(format!("{}", ContactMethod::Phone), "Phone");
    }

    #[test]
    fn field_labels_match_the_form() {
        assert_eq!(Field::FullName.label(), "Full Name");
        assert_eq!(Field::Comment.label(), "Comment");
    }
}
