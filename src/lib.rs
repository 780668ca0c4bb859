//! Wafrn notifications client library
//!
//! This library exposes the API client, the notification feed assembly and
//! the paging caches, for the command-line client and for reuse.

pub mod api;
pub mod config;
pub mod feed;
pub mod notifications;

// Re-export commonly used types for convenience
pub use api::{ApiError, NotificationsApi, WafrnClient};
pub use feed::{BadgeTracker, InfiniteFeed, NotificationsFeed, NotificationsV3Feed};
pub use notifications::{FullNotificationV3, Notification, NotificationDetails};

/// Current time as epoch milliseconds, the unit of every paging cursor.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
