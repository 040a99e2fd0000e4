//! Transient notification banners.
//!
//! A [`Notifier`] owns at most one visible notification at a time: issuing
//! a new one retires whatever is showing before the new one appears. Each
//! notification carries a single cancellable dismissal task; hovering
//! cancels it, leaving hover schedules a fresh short countdown, and manual
//! dismissal bypasses timers entirely.
//!
//! Dismissal is race-free by construction. Every scheduled task captures
//! the notification id and a schedule epoch, and the dismissal effect only
//! runs while both still match under the notifier's lock. A task whose
//! abort was missed can therefore never retire the wrong instance, and at
//! most one dismissal effect executes per notification.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

/// How long a success notification stays up untouched.
pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_millis(8000);

/// How long every other severity stays up untouched.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Countdown applied when the pointer leaves a hovered notification,
/// regardless of how much of the original timer had elapsed.
pub const HOVER_RESUME_AFTER: Duration = Duration::from_millis(2000);

/// Notification severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Icon glyph for hosts that render one.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "●",
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✗",
        }
    }

    /// Auto-dismiss delay for this severity. Success messages linger
    /// longer than the rest.
    pub fn dismiss_after(&self) -> Duration {
        match self {
            Severity::Success => SUCCESS_DISMISS_AFTER,
            _ => DEFAULT_DISMISS_AFTER,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Identifier of one notification instance.
pub type NotificationId = Uuid;

/// A notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Handle to the surface that renders notifications.
///
/// `show` inserts the element, `retire` removes it, `focus` moves input
/// focus onto it (newly shown notifications are focused for assistive
/// technology).
pub trait NotificationHost: Send + Sync {
    fn show(&self, notification: &Notification);
    fn retire(&self, id: NotificationId);
    fn focus(&self, id: NotificationId);
}

/// The currently visible notification plus its dismissal schedule.
struct Active {
    id: NotificationId,
    /// Bumped whenever the schedule changes (hover enter/leave). A timer
    /// task only fires if its captured epoch is still current.
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

struct Inner {
    host: Arc<dyn NotificationHost>,
    active: Mutex<Option<Active>>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Option<Active>> {
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run the dismissal effect if `id` (and, for timer tasks, `epoch`)
    /// still names the visible notification.
    fn retire(&self, id: NotificationId, epoch: Option<u64>) -> bool {
        let mut guard = self.lock();
        let current = matches!(
            guard.as_ref(),
            Some(a) if a.id == id && epoch.is_none_or(|e| e == a.epoch)
        );
        if !current {
            return false;
        }
        if let Some(mut active) = guard.take() {
            if let Some(timer) = active.timer.take() {
                timer.abort();
            }
        }
        drop(guard);
        self.host.retire(id);
        log::debug!("notification {id} dismissed");
        true
    }
}

/// Issues notifications and owns their dismissal timers.
///
/// Cheap to clone; clones share the same visible-notification slot.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    /// Create a notifier rendering through the given host.
    pub fn new(host: Arc<dyn NotificationHost>) -> Self {
        Self {
            inner: Arc::new(Inner {
                host,
                active: Mutex::new(None),
            }),
        }
    }

    /// Show a notification, retiring any visible one first.
    ///
    /// Must be called from within a tokio runtime: the auto-dismiss timer
    /// is a spawned task.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
        };
        let id = notification.id;

        let old_id = {
            let mut guard = self.inner.lock();
            let old_id = guard.take().map(|mut old| {
                if let Some(timer) = old.timer.take() {
                    timer.abort();
                }
                old.id
            });
            let timer = schedule(&self.inner, id, 0, severity.dismiss_after());
            *guard = Some(Active {
                id,
                epoch: 0,
                timer: Some(timer),
            });
            old_id
        };

        // The previous banner is retired before the new one appears.
        if let Some(old_id) = old_id {
            self.inner.host.retire(old_id);
        }

        log::debug!("showing {severity} notification {id}: {}", notification.message);
        self.inner.host.show(&notification);
        self.inner.host.focus(id);

        NotificationHandle {
            id,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Id of the visible notification, if any.
    pub fn visible(&self) -> Option<NotificationId> {
        self.inner.lock().as_ref().map(|a| a.id)
    }
}

/// Spawn the single scheduled dismissal task for a notification.
fn schedule(inner: &Arc<Inner>, id: NotificationId, epoch: u64, delay: Duration) -> JoinHandle<()> {
    let inner = Arc::clone(inner);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        inner.retire(id, Some(epoch));
    })
}

/// Handle to one issued notification.
///
/// Stale handles (the notification was already retired or replaced) are
/// inert: every operation is a no-op once the id no longer matches.
pub struct NotificationHandle {
    id: NotificationId,
    inner: Arc<Inner>,
}

impl NotificationHandle {
    /// Id of the notification this handle refers to.
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Pointer entered the banner: suspend the pending auto-dismiss.
    pub fn hover_enter(&self) {
        let mut guard = self.inner.lock();
        if let Some(active) = guard.as_mut()
            && active.id == self.id
        {
            if let Some(timer) = active.timer.take() {
                timer.abort();
            }
            active.epoch += 1;
        }
    }

    /// Pointer left the banner: restart a fixed short countdown.
    pub fn hover_leave(&self) {
        let mut guard = self.inner.lock();
        if let Some(active) = guard.as_mut()
            && active.id == self.id
        {
            if let Some(timer) = active.timer.take() {
                timer.abort();
            }
            active.epoch += 1;
            active.timer = Some(schedule(&self.inner, self.id, active.epoch, HOVER_RESUME_AFTER));
        }
    }

    /// Dismiss now, bypassing any timer. Returns false if the
    /// notification was already gone.
    pub fn dismiss(&self) -> bool {
        self.inner.retire(self.id, None)
    }
}
