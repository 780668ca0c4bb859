//! Infinite-scroll page caches for the notification streams and the badge
//! counter kept in step with them.

mod badges;
mod infinite;
mod scheme;

pub use badges::{BadgeTracker, PageFetchHook};
pub use infinite::{InfiniteFeed, NotificationsFeed, NotificationsV3Feed};
pub use scheme::{FeedScheme, V2Scheme, V3Scheme};
