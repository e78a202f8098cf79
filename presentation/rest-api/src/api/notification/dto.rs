use chrono::{DateTime, Utc};
use poem_openapi::Object;

use notifier::Notification;

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    /// Notification identifier
    pub id: String,
    /// Message to show to the user
    pub message: String,
    /// When the failure was reported
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            message: notification.message,
            created_at: notification.created_at,
        }
    }
}
