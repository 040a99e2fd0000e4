//! Form validation for the contact form.
//!
//! Validation is split into a pure rule table ([`rules`]) and a result
//! type shared with the submission workflow. Rules run per field on every
//! input/blur event, and over the whole form on submit.
//!
//! # Example
//!
//! ```
//! use formline::field::{Field, FieldValue};
//! use formline::validation::rules;
//!
//! let err = rules::validate(Field::Email, &FieldValue::Text("nope".into()));
//! assert!(err.is_some());
//!
//! let ok = rules::validate(Field::Email, &FieldValue::Text("a@b.com".into()));
//! assert!(ok.is_none());
//! ```

mod result;
pub mod rules;

pub use result::{FieldError, ValidationResult};
pub use rules::{validate, validate_all};
