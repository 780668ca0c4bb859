use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::{ApiError, NotificationBadges, NotificationsApi};

/// Runs after every successfully fetched feed page.
#[async_trait]
pub trait PageFetchHook: Send + Sync {
    async fn on_page_fetched(&self, query_key: &'static str);
}

/// Unread counters shown next to the notification feed.
///
/// The scroll start time is captured once, when the tracker is created, and
/// reused by every refetch.
pub struct BadgeTracker {
    api: Arc<dyn NotificationsApi>,
    start_scroll_ms: i64,
    latest: Mutex<Option<NotificationBadges>>,
}

impl BadgeTracker {
    pub fn new(api: Arc<dyn NotificationsApi>, start_scroll_ms: i64) -> Self {
        Self {
            api,
            start_scroll_ms,
            latest: Mutex::new(None),
        }
    }

    pub fn start_scroll_ms(&self) -> i64 {
        self.start_scroll_ms
    }

    /// Last successfully fetched counters, if any.
    pub fn latest(&self) -> Option<NotificationBadges> {
        *self.latest.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Fetch the counters and remember them.
    pub async fn refetch(&self) -> Result<NotificationBadges, ApiError> {
        let badges = self
            .api
            .get_notification_badges(self.start_scroll_ms)
            .await?;
        debug!(
            notifications = badges.notifications,
            asks = badges.asks,
            "Notification badges updated"
        );
        *self.latest.lock().unwrap_or_else(|e| e.into_inner()) = Some(badges);
        Ok(badges)
    }
}

#[async_trait]
impl PageFetchHook for BadgeTracker {
    async fn on_page_fetched(&self, query_key: &'static str) {
        if let Err(e) = self.refetch().await {
            warn!(
                query_key = query_key,
                error = %e,
                "Failed to refresh notification badges, keeping last known counts"
            );
        }
    }
}
