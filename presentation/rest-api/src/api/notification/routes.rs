use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use notifier::NotificationFeed;

use crate::api::notification::dto::NotificationResponse;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    feed: Arc<NotificationFeed>,
}

impl NotificationApi {
    pub fn new(feed: Arc<NotificationFeed>) -> Self {
        Self { feed }
    }
}

#[OpenApi]
impl NotificationApi {
    /// Drain notifications
    ///
    /// Returns pending user-facing error messages, oldest first, and
    /// clears them.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn drain(&self) -> Json<Vec<NotificationResponse>> {
        Json(self.feed.drain().into_iter().map(|n| n.into()).collect())
    }
}
