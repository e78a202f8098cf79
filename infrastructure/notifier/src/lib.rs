pub mod notification_feed;

pub use notification_feed::{Notification, NotificationFeed};
