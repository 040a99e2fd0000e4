//! Per-field validation rules.
//!
//! Rules are pure: a field identifier plus its current value maps to an
//! optional error message. They run on every input/change/blur event and
//! again on submit, so they must stay cheap and side-effect free.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::{Field, FieldValue, FormValues};

use super::result::{FieldError, ValidationResult};

/// Simple `local@domain.tld` shape: no whitespace, one `@`, at least one
/// `.` in the domain part. Deliberately looser than full RFC parsing.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Digits, spaces, and the usual phone punctuation.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\-\+\(\)\s]*$").expect("phone pattern"));

/// User-facing error messages.
pub mod messages {
    pub const REQUIRED: &str = "This field is required";
    pub const EMAIL: &str = "Please enter a valid email address";
    pub const PATTERN: &str = "Please match the requested format";
    pub const PRIVACY: &str = "You must accept the privacy policy";

    pub fn min_length(min: usize) -> String {
        format!("Please enter at least {min} characters")
    }

    pub fn max_length(max: usize) -> String {
        format!("Maximum {max} characters allowed")
    }
}

/// Validate a single field's value.
///
/// Returns `None` when the value is acceptable, or the first failing
/// rule's message. Emptiness checks trim whitespace; length bounds count
/// characters of the raw value.
pub fn validate(field: Field, value: &FieldValue) -> Option<String> {
    match field {
        Field::Name => {
            let text = value.as_text();
            if text.trim().is_empty() {
                Some(messages::REQUIRED.to_string())
            } else if text.chars().count() < 2 {
                Some(messages::min_length(2))
            } else if text.chars().count() > 100 {
                Some(messages::max_length(100))
            } else {
                None
            }
        }
        Field::Email => {
            let text = value.as_text();
            if text.trim().is_empty() {
                Some(messages::REQUIRED.to_string())
            } else if !EMAIL_RE.is_match(text.trim()) {
                Some(messages::EMAIL.to_string())
            } else {
                None
            }
        }
        Field::Phone => {
            let text = value.as_text();
            // Optional field: empty is fine.
            if text.trim().is_empty() || PHONE_RE.is_match(text) {
                None
            } else {
                Some(messages::PATTERN.to_string())
            }
        }
        Field::Message => {
            let text = value.as_text();
            if text.trim().is_empty() {
                Some(messages::REQUIRED.to_string())
            } else if text.chars().count() < 10 {
                Some(messages::min_length(10))
            } else if text.chars().count() > 1000 {
                Some(messages::max_length(1000))
            } else {
                None
            }
        }
        Field::Privacy => {
            if value.is_checked() {
                None
            } else {
                Some(messages::PRIVACY.to_string())
            }
        }
        Field::Subject => None,
    }
}

/// Validate every field of a form snapshot.
///
/// A failing field never short-circuits the others; all errors are
/// collected in document order.
pub fn validate_all(values: &FormValues) -> ValidationResult {
    let mut errors = Vec::new();

    for field in Field::ALL {
        if let Some(message) = validate(field, &values.get(field)) {
            errors.push(FieldError { field, message });
        }
    }

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn required_fields_reject_empty_values() {
        assert_eq!(
            validate(Field::Name, &text("")),
            Some(messages::REQUIRED.to_string())
        );
        assert_eq!(
            validate(Field::Email, &text("   ")),
            Some(messages::REQUIRED.to_string())
        );
        assert_eq!(
            validate(Field::Message, &text("")),
            Some(messages::REQUIRED.to_string())
        );
        assert_eq!(
            validate(Field::Privacy, &FieldValue::Checked(false)),
            Some(messages::PRIVACY.to_string())
        );
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(
            validate(Field::Name, &text("A")),
            Some(messages::min_length(2))
        );
        // Exactly at the minimum is valid.
        assert_eq!(validate(Field::Name, &text("Al")), None);
        let long = "x".repeat(101);
        assert_eq!(
            validate(Field::Name, &text(&long)),
            Some(messages::max_length(100))
        );
        assert_eq!(validate(Field::Name, &text(&"x".repeat(100))), None);
    }

    #[test]
    fn message_length_bounds() {
        assert_eq!(
            validate(Field::Message, &text("too short")),
            Some(messages::min_length(10))
        );
        assert_eq!(validate(Field::Message, &text("long enough now")), None);
        assert_eq!(validate(Field::Message, &text(&"m".repeat(10))), None);
        assert_eq!(
            validate(Field::Message, &text(&"m".repeat(1001))),
            Some(messages::max_length(1000))
        );
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate(Field::Email, &text("a@b.com")), None);
        assert_eq!(
            validate(Field::Email, &text("not-an-email")),
            Some(messages::EMAIL.to_string())
        );
        // Empty reports required, not invalid-email.
        assert_eq!(
            validate(Field::Email, &text("")),
            Some(messages::REQUIRED.to_string())
        );
        assert_eq!(
            validate(Field::Email, &text("two words@b.com")),
            Some(messages::EMAIL.to_string())
        );
        assert_eq!(
            validate(Field::Email, &text("a@b")),
            Some(messages::EMAIL.to_string())
        );
    }

    #[test]
    fn phone_is_optional_but_strict_when_present() {
        assert_eq!(validate(Field::Phone, &text("")), None);
        assert_eq!(validate(Field::Phone, &text("+1 (555) 123-4567")), None);
        assert_eq!(
            validate(Field::Phone, &text("abc")),
            Some(messages::PATTERN.to_string())
        );
    }

    #[test]
    fn subject_has_no_rule() {
        assert_eq!(validate(Field::Subject, &text("")), None);
        assert_eq!(validate(Field::Subject, &text("anything at all")), None);
    }

    #[test]
    fn privacy_checked_passes() {
        assert_eq!(validate(Field::Privacy, &FieldValue::Checked(true)), None);
    }

    #[test]
    fn validate_all_collects_errors_in_document_order() {
        let values = FormValues {
            name: "A".into(),
            email: "nope".into(),
            phone: "call me".into(),
            subject: String::new(),
            message: "hi".into(),
            privacy: false,
        };

        let result = validate_all(&values);
        let fields: Vec<_> = result.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Message,
                Field::Privacy
            ]
        );
        assert_eq!(result.first_invalid_field(), Some(Field::Name));
    }

    #[test]
    fn validate_all_on_good_values_is_valid() {
        let values = FormValues {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            subject: "Hello".into(),
            message: "A long enough message body.".into(),
            privacy: true,
        };
        assert!(validate_all(&values).is_valid());
    }
}
