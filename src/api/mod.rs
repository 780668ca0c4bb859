//! Wafrn REST API: wire models and the HTTP client.

mod client;
mod error;
pub mod models;

pub use client::{NotificationsApi, WafrnClient};
#[cfg(any(test, feature = "mock"))]
pub use client::MockNotificationsApi;
pub use error::ApiError;
pub use models::{NotificationBadges, NotificationsPage, NotificationsV3Page};
