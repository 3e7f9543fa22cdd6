//! Decode diagnostics.
//!
//! Non-fatal issues met while decoding a shapefile (unsupported shape
//! types, a header that disagrees with the stream, records skipped in
//! failsafe mode) are collected as [`Notification`] items instead of being
//! dropped or aborting the read. Inspect [`Dataset::notifications`] after
//! a read.
//!
//! [`Dataset::notifications`]: crate::dataset::Dataset::notifications

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Shape type recognized or unrecognized, but not decoded.
    NotSupported,
    /// Header oddity that did not stop decoding.
    Warning,
    /// Record error recovered from in failsafe mode.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    /// Record the issue belongs to, `None` for header-level issues.
    pub record_number: Option<i32>,
    pub message: String,
}

impl Notification {
    pub fn new(
        notification_type: NotificationType,
        record_number: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            record_number,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record_number {
            Some(n) => write!(f, "[{}] record {}: {}", self.notification_type, n, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a decode pass.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a header-level notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items
            .push(Notification::new(notification_type, None, message));
    }

    /// Record a notification tied to one record.
    pub fn notify_record(
        &mut self,
        notification_type: NotificationType,
        record_number: i32,
        message: impl Into<String>,
    ) {
        self.items.push(Notification::new(
            notification_type,
            Some(record_number),
            message,
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
