//! Paging cursors for the notification streams.
//!
//! Cursors are not opaque server tokens: they are computed on the client from
//! the timestamps of the last fetched page, so they must follow the server's
//! ordering assumptions exactly.

use serde::{Deserialize, Serialize};

use crate::api::models::{NotificationsPage, NotificationsV3Page, Timestamped};

/// Cursor of the legacy v2 stream: one watermark per substream, epoch ms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCursor {
    pub likes_date: i64,
    pub follows_date: i64,
    pub reblogs_date: i64,
    pub mentions_date: i64,
    pub emoji_reaction_date: i64,
    pub quotes_date: i64,
    pub page: u32,
}

impl NotificationCursor {
    /// Cursor of the first page: every substream starts at `now_ms`.
    pub fn initial(now_ms: i64) -> Self {
        Self::aligned(now_ms, 0)
    }

    fn aligned(date: i64, page: u32) -> Self {
        Self {
            likes_date: date,
            follows_date: date,
            reblogs_date: date,
            mentions_date: date,
            emoji_reaction_date: date,
            quotes_date: date,
            page,
        }
    }

    /// Cursor following `page`, which was fetched with `self`.
    ///
    /// All six watermarks are moved to the page end date. Returns `None` when
    /// every substream of `page` was empty, meaning the stream is exhausted.
    pub fn next(&self, page: &NotificationsPage) -> Option<Self> {
        notification_page_end(page).map(|end| Self::aligned(end, self.page + 1))
    }
}

/// Cursor of the v3 stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCursorV3 {
    pub page: u32,
    pub date: i64,
}

impl NotificationCursorV3 {
    pub fn initial(now_ms: i64) -> Self {
        Self {
            page: 0,
            date: now_ms,
        }
    }

    /// Cursor following `page`: the oldest notification becomes the new
    /// watermark. `None` when the page had no notifications.
    pub fn next(&self, page: &NotificationsV3Page) -> Option<Self> {
        last_date(&page.notifications).map(|date| Self {
            page: self.page + 1,
            date,
        })
    }
}

/// Oldest creation time among `items`, epoch ms.
pub fn last_date<T: Timestamped>(items: &[T]) -> Option<i64> {
    items.iter().map(Timestamped::created_at_ms).min()
}

/// Date up to which a v2 page is complete across all substreams.
///
/// Each substream contributes its oldest timestamp; the newest of those is
/// the boundary every substream has been read up to. `None` when all six
/// substreams are empty.
pub fn notification_page_end(page: &NotificationsPage) -> Option<i64> {
    [
        last_date(&page.emoji_reactions),
        last_date(&page.likes),
        last_date(&page.follows),
        last_date(&page.reblogs),
        last_date(&page.mentions),
        last_date(&page.quotes),
    ]
    .into_iter()
    .flatten()
    .max()
}
