//! Notification feed assembly: cursors, per-page resolution and the merged
//! lists of the v2 and v3 schemes.

pub mod cursor;
pub mod dashboard;
mod feed_v2;
mod feed_v3;
mod page_index;

#[cfg(test)]
pub(crate) mod test_support;

pub use cursor::{notification_page_end, NotificationCursor, NotificationCursorV3};
pub use dashboard::DashboardData;
pub use feed_v2::{
    notification_key, notification_list, page_notifications, Notification, NotificationDetails,
};
pub use feed_v3::{
    notification_key_v3, notification_list_v3, page_notifications_v3, FullNotificationV3,
    FullNotificationV3Details,
};
pub use page_index::PageIndex;
