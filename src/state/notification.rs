//! Transient toast notifications

use crate::login::Notifier;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts kept at once; older ones are dropped
const MAX_NOTIFICATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= timeout
    }
}

/// Queue of on-screen toasts, newest last
#[derive(Debug, Clone)]
pub struct Notifications {
    items: VecDeque<Notification>,
    timeout: Duration,
}

impl Notifications {
    pub fn new(timeout: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            timeout,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.items.push_back(Notification {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        });
        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
    }

    /// Drop toasts whose lifetime has elapsed
    pub fn prune_expired(&mut self, now: Instant) {
        let timeout = self.timeout;
        self.items.retain(|n| !n.is_expired(now, timeout));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for Notifications {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.push(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_latest() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        notifications.push(NotificationKind::Success, "Login successful!");
        let latest = notifications.iter().last().unwrap();
        assert_eq!(latest.kind, NotificationKind::Success);
        assert_eq!(latest.message, "Login successful!");
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        for i in 0..5 {
            notifications.push(NotificationKind::Error, format!("error {i}"));
        }
        assert_eq!(notifications.iter().count(), MAX_NOTIFICATIONS);
        assert_eq!(notifications.iter().next().unwrap().message, "error 2");
    }

    #[test]
    fn test_prune_expired() {
        let mut notifications = Notifications::new(Duration::from_millis(100));
        notifications.push(NotificationKind::Error, "old");
        notifications.prune_expired(Instant::now());
        assert_eq!(notifications.iter().count(), 1);

        notifications.prune_expired(Instant::now() + Duration::from_millis(200));
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_is_expired_with_past_now() {
        let n = Notification {
            kind: NotificationKind::Success,
            message: String::new(),
            created_at: Instant::now(),
        };
        // A clock reading before creation never counts as expired
        assert!(!n.is_expired(n.created_at, Duration::from_millis(1)));
    }

    #[test]
    fn test_notifier_impl_pushes() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        notifications.notify(NotificationKind::Error, "Invalid credentials");
        assert_eq!(notifications.iter().last().unwrap().message, "Invalid credentials");
    }
}
