//! Toast notifications emitted by the workshop form

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How long a success toast stays on screen
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_secs(3);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a toast so a later notification can replace it in place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

impl NotificationId {
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Loading,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    /// Auto-dismiss delay; `None` stays until replaced
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            kind: NotificationKind::Loading,
            message: message.into(),
            duration: None,
        }
    }

    /// Success toast that takes over the slot of `id`
    pub fn success(id: NotificationId, message: impl Into<String>) -> Self {
        Self {
            id,
            kind: NotificationKind::Success,
            message: message.into(),
            duration: Some(SUCCESS_TOAST_DURATION),
        }
    }

    /// Builder method: override how long the toast stays up
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.kind == NotificationKind::Loading
    }
}

/// Insert `notification`, replacing any toast that shares its id
pub fn upsert(toasts: &mut Vec<Notification>, notification: Notification) {
    match toasts.iter_mut().find(|t| t.id == notification.id) {
        Some(existing) => *existing = notification,
        None => toasts.push(notification),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Notification::loading("one");
        let b = Notification::loading("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let loading = Notification::loading("Processing your request...");
        let other = Notification::loading("Other");
        let mut toasts = vec![loading.clone(), other.clone()];

        upsert(&mut toasts, Notification::success(loading.id, "Done"));

        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, NotificationKind::Success);
        assert_eq!(toasts[0].message, "Done");
        assert_eq!(toasts[0].duration, Some(SUCCESS_TOAST_DURATION));
        assert_eq!(toasts[1], other);
    }

    #[test]
    fn test_with_duration_overrides_default() {
        let loading = Notification::loading("Processing your request...");
        let done = Notification::success(loading.id, "Done").with_duration(Duration::from_millis(1500));
        assert_eq!(done.id, loading.id);
        assert_eq!(done.duration, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut toasts = Vec::new();
        upsert(&mut toasts, Notification::loading("x"));
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].is_loading());
    }
}
