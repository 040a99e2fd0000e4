//! Contact form field model.
//!
//! Fields form a closed enumeration: every input the form owns is listed
//! here, so "this field has no validation rule" is an explicit match arm
//! rather than a silent lookup miss.

use serde::{Deserialize, Serialize};

/// One named input in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Privacy,
}

impl Field {
    /// All form fields, in document order.
    ///
    /// Document order matters: on a rejected submit, focus goes to the
    /// first invalid field in this order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
        Field::Privacy,
    ];

    /// Stable identifier, matching the form element name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Privacy => "privacy",
        }
    }

    /// Whether this field holds a checkbox value rather than text.
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Field::Privacy)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The current value of a single field.
///
/// Text inputs and the textarea carry `Text`; the privacy checkbox
/// carries `Checked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Text content, or empty for checkbox values.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Checkbox state, or false for text values.
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

/// A full snapshot of the form's values.
///
/// This is the payload handed to the transport on submit. `Default` is the
/// empty form (all text empty, privacy unchecked).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub privacy: bool,
}

impl FormValues {
    /// Read one field's value.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::Phone => FieldValue::Text(self.phone.clone()),
            Field::Subject => FieldValue::Text(self.subject.clone()),
            Field::Message => FieldValue::Text(self.message.clone()),
            Field::Privacy => FieldValue::Checked(self.privacy),
        }
    }

    /// Overwrite one field's value.
    ///
    /// A checkbox value written to a text field (or vice versa) coerces
    /// through [`FieldValue::as_text`] / [`FieldValue::is_checked`].
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::Name => self.name = value.as_text().to_string(),
            Field::Email => self.email = value.as_text().to_string(),
            Field::Phone => self.phone = value.as_text().to_string(),
            Field::Subject => self.subject = value.as_text().to_string(),
            Field::Message => self.message = value.as_text().to_string(),
            Field::Privacy => self.privacy = value.is_checked(),
        }
    }
}
