//! Transient operator notifications.

use chrono::TimeDelta;
use serde::Serialize;

use crate::time::Timestamp;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL_SECS: i64 = 3;

/// Severity of a notification, also its CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A message shown to the operator after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: Timestamp,
}

impl Notification {
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>, raised_at: Timestamp) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at,
        }
    }

    /// Moment the notification disappears.
    #[must_use]
    pub fn expires_at(&self) -> Timestamp {
        self.raised_at + TimeDelta::seconds(NOTIFICATION_TTL_SECS)
    }

    #[must_use]
    pub fn is_visible_at(&self, now: Timestamp) -> bool {
        now < self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn should_stay_visible_for_three_seconds() {
        let n = Notification::new(
            NotificationKind::Success,
            "Created subject",
            at("2024-04-01T00:00:00Z"),
        );
        assert!(n.is_visible_at(at("2024-04-01T00:00:02.999Z")));
        assert!(!n.is_visible_at(at("2024-04-01T00:00:03Z")));
    }

    #[test]
    fn should_serialize_kind_in_lowercase() {
        let n = Notification::new(NotificationKind::Error, "boom", at("2024-04-01T00:00:00Z"));
        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(value["kind"], "error");
        assert_eq!(value["message"], "boom");
    }
}
