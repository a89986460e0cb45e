//! Transient notifications ("info bars").
//!
//! One notification is shown at a time. Each carries an id so that an expiry
//! timer started for an older notification cannot dismiss a newer one.

use std::time::Duration;

/// Severity of a notification; decides its icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// A titled message shown at the top of the editor page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Holds the visible notification and hands out ids.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing any visible one. Returns its id.
    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Success, "Success", message)
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Warning, title, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Error, "Error", message)
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Dismisses the notification with `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}

/// Resolves to `id` after `after` has elapsed.
pub async fn expire(id: u64, after: Duration) -> u64 {
    tokio::time::sleep(after).await;
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_current() {
        let mut notifier = Notifier::new();
        let first = notifier.success("Saved");
        let second = notifier.error("Permission denied");

        assert_ne!(first, second);
        let current = notifier.current().unwrap();
        assert_eq!(current.kind, NotificationKind::Error);
        assert_eq!(current.title, "Error");
        assert_eq!(current.message, "Permission denied");
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut notifier = Notifier::new();
        let old = notifier.success("Opened");
        let new = notifier.warning("Search", "'x' was not found");

        assert!(!notifier.dismiss(old));
        assert!(notifier.current().is_some());
        assert!(notifier.dismiss(new));
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_expire_returns_id() {
        assert_eq!(expire(7, Duration::from_millis(1)).await, 7);
    }
}
