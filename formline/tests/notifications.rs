//! Integration tests for notification timing and replacement.
//!
//! These run on tokio's paused clock, so the 5/8 second dismissal windows
//! elapse instantly and deterministically.

use std::sync::Arc;
use std::time::Duration;

use formline::prelude::*;

/// Host that tracks the visible banner and a full event log.
#[derive(Debug, Clone, Default)]
struct RecordingHost {
    visible: State<Option<Notification>>,
    events: State<Vec<Event>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Shown(NotificationId),
    Retired(NotificationId),
    Focused(NotificationId),
}

impl NotificationHost for RecordingHost {
    fn show(&self, notification: &Notification) {
        self.visible.set(Some(notification.clone()));
        self.events.update(|e| e.push(Event::Shown(notification.id)));
    }

    fn retire(&self, id: NotificationId) {
        self.visible.update(|v| {
            if v.as_ref().map(|n| n.id) == Some(id) {
                *v = None;
            }
        });
        self.events.update(|e| e.push(Event::Retired(id)));
    }

    fn focus(&self, id: NotificationId) {
        self.events.update(|e| e.push(Event::Focused(id)));
    }
}

fn notifier() -> (Notifier, RecordingHost) {
    let host = RecordingHost::default();
    (Notifier::new(Arc::new(host.clone())), host)
}

fn retire_count(host: &RecordingHost, id: NotificationId) -> usize {
    host.events
        .with(|e| e.iter().filter(|ev| **ev == Event::Retired(id)).count())
}

// =============================================================================
// Auto-dismiss timing
// =============================================================================

#[tokio::test(start_paused = true)]
async fn error_banner_dismisses_after_five_seconds() {
    let (notifier, host) = notifier();
    notifier.notify("nope", Severity::Error);

    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert!(host.visible.get().is_some());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(host.visible.get().is_none());
}

#[tokio::test(start_paused = true)]
async fn success_banner_outlives_an_error_banner() {
    let (error_notifier, error_host) = notifier();
    let (success_notifier, success_host) = notifier();

    error_notifier.notify("failed", Severity::Error);
    success_notifier.notify("delivered", Severity::Success);

    // Past the 5 s window: error gone, success still up.
    tokio::time::sleep(Duration::from_millis(6000)).await;
    assert!(error_host.visible.get().is_none());
    assert!(success_host.visible.get().is_some());

    // Past the 8 s window: success gone too.
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(success_host.visible.get().is_none());
}

// =============================================================================
// Replacement
// =============================================================================

#[tokio::test(start_paused = true)]
async fn new_notification_retires_the_previous_one_first() {
    let (notifier, host) = notifier();

    let first = notifier.notify("first", Severity::Info);
    let second = notifier.notify("second", Severity::Info);

    // Only the second is visible, and the first was retired before the
    // second appeared.
    assert_eq!(host.visible.get().map(|n| n.id), Some(second.id()));
    let events = host.events.get();
    let retired_first = events
        .iter()
        .position(|e| *e == Event::Retired(first.id()))
        .expect("first banner retired");
    let shown_second = events
        .iter()
        .position(|e| *e == Event::Shown(second.id()))
        .expect("second banner shown");
    assert!(retired_first < shown_second);

    // The first's timer never fires a second dismissal later on.
    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert_eq!(retire_count(&host, first.id()), 1);
}

#[tokio::test(start_paused = true)]
async fn new_notification_receives_focus() {
    let (notifier, host) = notifier();
    let handle = notifier.notify("hello", Severity::Info);

    let events = host.events.get();
    assert!(events.contains(&Event::Focused(handle.id())));
}

// =============================================================================
// Hover pause / resume
// =============================================================================

#[tokio::test(start_paused = true)]
async fn hover_suspends_auto_dismiss() {
    let (notifier, host) = notifier();
    let handle = notifier.notify("hold on", Severity::Error);

    tokio::time::sleep(Duration::from_millis(3000)).await;
    handle.hover_enter();

    // Well past the original window: still visible while hovered.
    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert!(host.visible.get().is_some());
}

#[tokio::test(start_paused = true)]
async fn hover_leave_schedules_a_fixed_short_countdown() {
    let (notifier, host) = notifier();
    let handle = notifier.notify("hold on", Severity::Error);

    tokio::time::sleep(Duration::from_millis(4500)).await;
    handle.hover_enter();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    handle.hover_leave();

    // The countdown is a fresh 2 s, not the remainder of the original.
    tokio::time::sleep(Duration::from_millis(1900)).await;
    assert!(host.visible.get().is_some());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(host.visible.get().is_none());
    assert_eq!(retire_count(&host, handle.id()), 1);
}

// =============================================================================
// Manual dismissal
// =============================================================================

#[tokio::test(start_paused = true)]
async fn manual_dismiss_bypasses_the_timer() {
    let (notifier, host) = notifier();
    let handle = notifier.notify("bye", Severity::Info);

    assert!(handle.dismiss());
    assert!(host.visible.get().is_none());

    // Dismissing again is a no-op, and the aborted timer never fires.
    assert!(!handle.dismiss());
    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert_eq!(retire_count(&host, handle.id()), 1);
}

#[tokio::test(start_paused = true)]
async fn stale_handles_are_inert() {
    let (notifier, host) = notifier();
    let first = notifier.notify("first", Severity::Info);
    let second = notifier.notify("second", Severity::Info);

    // The first handle can no longer affect the visible banner.
    assert!(!first.dismiss());
    first.hover_enter();
    first.hover_leave();
    assert_eq!(host.visible.get().map(|n| n.id), Some(second.id()));

    // The second still auto-dismisses on its own schedule.
    tokio::time::sleep(Duration::from_millis(5100)).await;
    assert!(host.visible.get().is_none());
}
