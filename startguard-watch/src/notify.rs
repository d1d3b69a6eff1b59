//! Operator notifications.
//!
//! The sink is a fire-and-forget collaborator: the loop tells the operator
//! something changed and moves straight on to the prompt. How the alert is
//! rendered (console line, desktop toast) is the host's business.

use async_trait::async_trait;
use startguard_types::EntryName;
use std::time::Duration;

/// How prominently a notification should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Informational; the default and currently only level.
    Info,
}

/// A transient alert for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Full message body.
    pub body: String,
    /// Display prominence.
    pub urgency: Urgency,
    /// How long the alert should stay visible.
    pub duration: Duration,
}

impl Notification {
    /// Alert for a newly detected autostart entry.
    #[must_use]
    pub fn new_entry(name: &EntryName) -> Self {
        Self {
            title: "New autostart entry".to_string(),
            body: format!(
                "A new program '{name}' has been added to autostart. Allow it?"
            ),
            urgency: Urgency::Info,
            duration: Duration::from_millis(5000),
        }
    }

    /// One-shot degraded-mode alert: the store could not be read at all.
    #[must_use]
    pub fn store_degraded() -> Self {
        Self {
            title: "Autostart store unreadable".to_string(),
            body: "No configured scope could be read; monitoring continues \
                   but new entries cannot be detected until the store is \
                   readable again."
                .to_string(),
            urgency: Urgency::Info,
            duration: Duration::from_millis(5000),
        }
    }
}

/// Emits transient alerts to the operator.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Shows one notification. Failures are the sink's own problem; the
    /// loop does not depend on delivery.
    async fn notify(&self, notification: &Notification);
}

pub(crate) mod mock {
    use super::*;
    use std::sync::Mutex;

    /// A [`NotificationSink`] that records everything it is asked to show.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        notifications: Mutex<Vec<Notification>>,
    }

    impl RecordingSink {
        /// Creates an empty recording sink.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns all recorded notifications in emission order.
        pub fn notifications(&self) -> Vec<Notification> {
            self.notifications.lock().unwrap().clone()
        }

        /// Number of notifications recorded so far.
        pub fn count(&self) -> usize {
            self.notifications.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn notify(&self, notification: &Notification) {
            self.notifications.lock().unwrap().push(notification.clone());
        }
    }
}
