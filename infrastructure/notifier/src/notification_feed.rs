use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::notifier::Notifier;

const DEFAULT_CAPACITY: usize = 50;

/// A user-facing error message waiting to be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory notification channel. Clients drain it to display toasts;
/// when full, the oldest notification is dropped.
pub struct NotificationFeed {
    pending: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending().is_empty()
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        // A poisoned lock still holds a consistent queue
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationFeed {
    fn report_error(&self, message: &str) {
        tracing::warn!(target: "storefront_cart::notifications", "{}", message);

        let mut pending = self.pending();
        if pending.len() == self.capacity {
            pending.pop_front();
        }
        pending.push_back(Notification {
            id: Uuid::new_v4(),
            message: message.to_string(),
            created_at: Utc::now(),
        });
    }
}
