use std::time::{Duration, Instant};

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

/// Single banner slot. Setting a notification replaces the previous one and re-arms the
/// expiry; nothing stacks.
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    expires_at: Option<Instant>,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.set(text.into(), NotificationKind::Success, now);
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.set(text.into(), NotificationKind::Error, now);
    }

    fn set(&mut self, text: String, kind: NotificationKind, now: Instant) {
        if text.is_empty() {
            self.clear();
            return;
        }
        self.current = Some(Notification { text, kind });
        self.expires_at = Some(now + NOTIFICATION_TTL);
    }

    pub fn clear(&mut self) -> bool {
        self.expires_at = None;
        self.current.take().is_some()
    }

    /// Clears the slot once its deadline has passed. Returns whether anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => self.clear(),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/notification.rs"]
mod tests;
