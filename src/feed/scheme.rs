use std::fmt::Debug;

use async_trait::async_trait;

use crate::api::{ApiError, NotificationsApi, NotificationsPage, NotificationsV3Page};
use crate::notifications::{
    notification_list, notification_list_v3, FullNotificationV3, Notification,
    NotificationCursor, NotificationCursorV3,
};

/// Ties together how one notification stream is paged and assembled.
#[async_trait]
pub trait FeedScheme: Send + Sync {
    type Cursor: Clone + Debug + Send + Sync;
    type Page: Send + Sync;
    type Item;

    /// Key under which the stream's pages are cached.
    fn query_key(&self) -> &'static str;

    fn initial_cursor(&self, now_ms: i64) -> Self::Cursor;

    async fn fetch(
        &self,
        api: &dyn NotificationsApi,
        cursor: &Self::Cursor,
    ) -> Result<Self::Page, ApiError>;

    /// Cursor of the page after `last_page`, `None` once the stream is exhausted.
    fn next_cursor(&self, last_page: &Self::Page, last_cursor: &Self::Cursor)
        -> Option<Self::Cursor>;

    /// Flat, deduplicated notification list over `pages` in fetch order.
    fn assemble(&self, pages: &[Self::Page]) -> Vec<Self::Item>;

    /// Number of raw records in a page, for logging.
    fn record_count(&self, page: &Self::Page) -> usize;
}

/// The legacy six-substream scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct V2Scheme;

#[async_trait]
impl FeedScheme for V2Scheme {
    type Cursor = NotificationCursor;
    type Page = NotificationsPage;
    type Item = Notification;

    fn query_key(&self) -> &'static str {
        "notifications"
    }

    fn initial_cursor(&self, now_ms: i64) -> NotificationCursor {
        NotificationCursor::initial(now_ms)
    }

    async fn fetch(
        &self,
        api: &dyn NotificationsApi,
        cursor: &NotificationCursor,
    ) -> Result<NotificationsPage, ApiError> {
        api.get_notifications(cursor).await
    }

    fn next_cursor(
        &self,
        last_page: &NotificationsPage,
        last_cursor: &NotificationCursor,
    ) -> Option<NotificationCursor> {
        last_cursor.next(last_page)
    }

    fn assemble(&self, pages: &[NotificationsPage]) -> Vec<Notification> {
        notification_list(pages)
    }

    fn record_count(&self, page: &NotificationsPage) -> usize {
        page.follows.len()
            + page.likes.len()
            + page.reblogs.len()
            + page.mentions.len()
            + page.emoji_reactions.len()
            + page.quotes.len()
    }
}

/// The unified single-stream scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct V3Scheme;

#[async_trait]
impl FeedScheme for V3Scheme {
    type Cursor = NotificationCursorV3;
    type Page = NotificationsV3Page;
    type Item = FullNotificationV3;

    fn query_key(&self) -> &'static str {
        "notificationsV3"
    }

    fn initial_cursor(&self, now_ms: i64) -> NotificationCursorV3 {
        NotificationCursorV3::initial(now_ms)
    }

    async fn fetch(
        &self,
        api: &dyn NotificationsApi,
        cursor: &NotificationCursorV3,
    ) -> Result<NotificationsV3Page, ApiError> {
        api.get_notifications_v3(cursor).await
    }

    fn next_cursor(
        &self,
        last_page: &NotificationsV3Page,
        last_cursor: &NotificationCursorV3,
    ) -> Option<NotificationCursorV3> {
        last_cursor.next(last_page)
    }

    fn assemble(&self, pages: &[NotificationsV3Page]) -> Vec<FullNotificationV3> {
        notification_list_v3(pages)
    }

    fn record_count(&self, page: &NotificationsV3Page) -> usize {
        page.notifications.len()
    }
}
