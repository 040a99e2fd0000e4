//! Headless contact-form interaction library.
//!
//! `formline` models a brochure site's contact form as a dependency-injected
//! workflow: pure per-field validation, a submission state machine over an
//! async transport port, and a single-slot notification center with
//! cancellable auto-dismiss timers. Everything the page renders is behind
//! the [`page::FormPage`] and [`notify::NotificationHost`] ports, so the
//! whole flow runs and tests without a UI.

pub mod field;
pub mod filter;
pub mod notify;
pub mod page;
pub mod state;
pub mod submit;
pub mod transport;
pub mod validation;

pub mod prelude {
    pub use crate::field::{Field, FieldValue, FormValues};
    pub use crate::filter::CategoryFilter;
    pub use crate::notify::{
        Notification, NotificationHandle, NotificationHost, NotificationId, Notifier, Severity,
    };
    pub use crate::page::{FormPage, MemoryPage, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
    pub use crate::state::State;
    pub use crate::submit::{FormController, SubmitOutcome, SubmitPhase};
    pub use crate::transport::{SendError, SimulatedTransport, Transport};
    pub use crate::validation::{FieldError, ValidationResult};
}
