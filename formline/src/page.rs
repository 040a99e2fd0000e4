//! Page port: the boundary between the workflow and whatever renders it.
//!
//! The workflow never touches a real page. It talks to a [`FormPage`]
//! handle that exposes exactly what the form needs: per-field value access,
//! a settable error slot, focus, and the three submit-control knobs
//! (disabled flag, label text, busy indicator). [`MemoryPage`] implements
//! the port over shared state for tests and headless demos.

use std::collections::HashMap;

use crate::field::{Field, FieldValue, FormValues};
use crate::state::State;

/// Idle label of the submit control.
pub const SUBMIT_LABEL_IDLE: &str = "Send Message";

/// Label shown while a submission is in flight.
pub const SUBMIT_LABEL_BUSY: &str = "Sending...";

/// Handle to the rendered contact form.
///
/// Setting an error implies the visual-invalid flag plus the message text;
/// clearing it removes both. Implementations decide how that maps onto
/// their widget tree.
pub trait FormPage: Send + Sync {
    /// Current value of one field.
    fn field_value(&self, field: Field) -> FieldValue;

    /// Overwrite one field's value.
    fn set_field_value(&self, field: Field, value: FieldValue);

    /// Show (`Some`) or clear (`None`) a field's inline error.
    fn set_field_error(&self, field: Field, message: Option<String>);

    /// Move input focus to a field.
    fn focus_field(&self, field: Field);

    /// Enable or disable the submit control.
    fn set_submit_disabled(&self, disabled: bool);

    /// Swap the submit control's label.
    fn set_submit_label(&self, label: &str);

    /// Show or hide the busy indicator on the submit control.
    fn set_busy_indicator(&self, visible: bool);
}

/// Snapshot every field into a [`FormValues`] payload.
pub fn snapshot(page: &dyn FormPage) -> FormValues {
    let mut values = FormValues::default();
    for field in Field::ALL {
        values.set(field, page.field_value(field));
    }
    values
}

/// In-memory [`FormPage`] backed by shared state.
///
/// Cheap to clone; clones observe the same page. Tests read back what the
/// workflow did through the inspection methods.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    values: State<FormValues>,
    errors: State<HashMap<Field, String>>,
    focused: State<Option<Field>>,
    submit_disabled: State<bool>,
    submit_label: State<String>,
    busy_indicator: State<bool>,
}

impl MemoryPage {
    /// Create an empty page with the idle submit label.
    pub fn new() -> Self {
        let page = Self::default();
        page.submit_label.set(SUBMIT_LABEL_IDLE.to_string());
        page
    }

    /// The error currently shown for a field, if any.
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.errors.with(|e| e.get(&field).cloned())
    }

    /// Fields currently showing an error.
    pub fn error_count(&self) -> usize {
        self.errors.with(|e| e.len())
    }

    /// The field that last received focus.
    pub fn focused(&self) -> Option<Field> {
        self.focused.get()
    }

    /// Whether the submit control is disabled.
    pub fn submit_disabled(&self) -> bool {
        self.submit_disabled.get()
    }

    /// Current label of the submit control.
    pub fn submit_label(&self) -> String {
        self.submit_label.get()
    }

    /// Whether the busy indicator is showing.
    pub fn busy_indicator(&self) -> bool {
        self.busy_indicator.get()
    }
}

impl FormPage for MemoryPage {
    fn field_value(&self, field: Field) -> FieldValue {
        self.values.with(|v| v.get(field))
    }

    fn set_field_value(&self, field: Field, value: FieldValue) {
        self.values.update(|v| v.set(field, value));
    }

    fn set_field_error(&self, field: Field, message: Option<String>) {
        self.errors.update(|e| match message {
            Some(msg) => {
                e.insert(field, msg);
            }
            None => {
                e.remove(&field);
            }
        });
    }

    fn focus_field(&self, field: Field) {
        self.focused.set(Some(field));
    }

    fn set_submit_disabled(&self, disabled: bool) {
        self.submit_disabled.set(disabled);
    }

    fn set_submit_label(&self, label: &str) {
        self.submit_label.set(label.to_string());
    }

    fn set_busy_indicator(&self, visible: bool) {
        self.busy_indicator.set(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_page() {
        let page = MemoryPage::new();
        let other = page.clone();

        page.set_field_value(Field::Name, "Ada".into());
        assert_eq!(other.field_value(Field::Name), FieldValue::Text("Ada".into()));

        other.set_field_error(Field::Name, Some("oops".into()));
        assert_eq!(page.field_error(Field::Name), Some("oops".into()));
    }

    #[test]
    fn snapshot_collects_every_field() {
        let page = MemoryPage::new();
        page.set_field_value(Field::Email, "ada@example.com".into());
        page.set_field_value(Field::Privacy, true.into());

        let values = snapshot(&page);
        assert_eq!(values.email, "ada@example.com");
        assert!(values.privacy);
        assert!(values.name.is_empty());
    }
}
