//! Transient notification state
//!
//! Notifications are pushed into a reactive queue and rendered by
//! [`crate::components::Notifications`]. Each entry lives for
//! `NOTIFICATION_DISPLAY_MS`, is marked fading for `NOTIFICATION_FADE_MS`,
//! then removed. Removing an entry that is already gone is a silent no-op.

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::utils::constants::{NOTIFICATION_DISPLAY_MS, NOTIFICATION_FADE_MS};

/// Notification severity, mapped to a CSS class by the host component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub fading: bool,
}

/// Plain queue behind the reactive signal. Kept free of wasm dependencies so
/// the bookkeeping is testable on the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    /// Append an entry and return its id. Ids start at 1 and only grow.
    pub fn push(&mut self, message: String, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message,
            severity,
            fading: false,
        });
        id
    }

    /// Mark an entry as fading; missing ids are tolerated silently.
    pub fn begin_fade(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.fading = true;
        }
    }

    /// Drop an entry; missing ids are tolerated silently.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Global notification context
#[derive(Clone, Copy)]
pub struct NotifyContext {
    pub queue: RwSignal<NotificationQueue>,
}

impl NotifyContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    /// Show a transient notification and schedule its fade and removal.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        log::info!("notify [{}]: {}", severity.css_class(), message);

        let Some(id) = self.queue.try_update(|q| q.push(message, severity)) else {
            return;
        };
        self.schedule_expiry(id);
    }

    // Expiry timers need the browser event loop; on the host a pushed entry
    // stays in the queue where tests can inspect it.
    #[cfg(target_arch = "wasm32")]
    fn schedule_expiry(&self, id: u64) {
        let queue = self.queue;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_DISPLAY_MS).await;
            let _ = queue.try_update(|q| q.begin_fade(id));
            TimeoutFuture::new(NOTIFICATION_FADE_MS).await;
            let _ = queue.try_update(|q| q.remove(id));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_expiry(&self, _id: u64) {}

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, Severity::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }
}

pub fn provide_notify_context() -> NotifyContext {
    let context = NotifyContext::new();
    provide_context(context);
    context
}

pub fn use_notify_context() -> NotifyContext {
    expect_context::<NotifyContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("first".into(), Severity::Info);
        let b = queue.push("second".into(), Severity::Error);
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn test_begin_fade_marks_only_the_target() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("stays".into(), Severity::Info);
        let b = queue.push("fades".into(), Severity::Warning);
        queue.begin_fade(b);
        assert!(!queue.items()[0].fading);
        assert!(queue.items()[1].fading);
        let _ = a;
    }

    #[test]
    fn test_remove_missing_id_is_a_no_op() {
        let mut queue = NotificationQueue::default();
        let id = queue.push("only".into(), Severity::Info);
        queue.remove(9999);
        assert_eq!(queue.items().len(), 1);
        queue.remove(id);
        queue.remove(id);
        assert!(queue.items().is_empty());
    }

    #[test]
    fn test_default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::default().css_class(), "info");
    }
}
