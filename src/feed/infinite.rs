//! Cursor-based infinite list over one notification stream.

use std::sync::Arc;

use tracing::{debug, info};

use super::badges::PageFetchHook;
use super::scheme::{FeedScheme, V2Scheme, V3Scheme};
use crate::api::{ApiError, NotificationsApi};

pub type NotificationsFeed = InfiniteFeed<V2Scheme>;
pub type NotificationsV3Feed = InfiniteFeed<V3Scheme>;

/// In-memory page cache of one notification stream.
///
/// Pages are fetched newest first. `fetch_next_page` borrows the feed
/// mutably, so at most one fetch is in flight per stream.
pub struct InfiniteFeed<S: FeedScheme> {
    scheme: S,
    api: Arc<dyn NotificationsApi>,
    hooks: Vec<Arc<dyn PageFetchHook>>,
    initial_cursor: S::Cursor,
    pages: Vec<S::Page>,
    page_cursors: Vec<S::Cursor>,
    next_cursor: Option<S::Cursor>,
}

impl<S: FeedScheme> InfiniteFeed<S> {
    pub fn new(scheme: S, api: Arc<dyn NotificationsApi>, now_ms: i64) -> Self {
        let initial_cursor = scheme.initial_cursor(now_ms);
        Self {
            scheme,
            api,
            hooks: Vec::new(),
            next_cursor: Some(initial_cursor.clone()),
            initial_cursor,
            pages: Vec::new(),
            page_cursors: Vec::new(),
        }
    }

    /// Register a hook to run after each fetched page.
    pub fn with_hook(mut self, hook: Arc<dyn PageFetchHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn query_key(&self) -> &'static str {
        self.scheme.query_key()
    }

    /// Cached pages in fetch order.
    pub fn pages(&self) -> &[S::Page] {
        &self.pages
    }

    /// Cursor each cached page was fetched with.
    pub fn page_cursors(&self) -> &[S::Cursor] {
        &self.page_cursors
    }

    pub fn next_cursor(&self) -> Option<&S::Cursor> {
        self.next_cursor.as_ref()
    }

    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Fetch the next page and append it to the cache.
    ///
    /// Returns `Ok(None)` without a request when the stream is exhausted. On
    /// error the cache is left as it was and no hook runs.
    pub async fn fetch_next_page(&mut self) -> Result<Option<&S::Page>, ApiError> {
        let Some(cursor) = self.next_cursor.clone() else {
            debug!(query_key = self.query_key(), "No more pages to fetch");
            return Ok(None);
        };

        let page = self.scheme.fetch(self.api.as_ref(), &cursor).await?;

        for hook in &self.hooks {
            hook.on_page_fetched(self.scheme.query_key()).await;
        }

        self.next_cursor = self.scheme.next_cursor(&page, &cursor);
        info!(
            query_key = self.query_key(),
            page = self.pages.len(),
            records = self.scheme.record_count(&page),
            has_next_page = self.next_cursor.is_some(),
            "Fetched notifications page"
        );

        self.page_cursors.push(cursor);
        self.pages.push(page);
        Ok(self.pages.last())
    }

    /// The assembled notification list over every cached page.
    pub fn notifications(&self) -> Vec<S::Item> {
        self.scheme.assemble(&self.pages)
    }

    /// Drop the cached pages and restart from the top at `now_ms`.
    pub fn reset(&mut self, now_ms: i64) {
        self.initial_cursor = self.scheme.initial_cursor(now_ms);
        self.next_cursor = Some(self.initial_cursor.clone());
        self.pages.clear();
        self.page_cursors.clear();
    }

    pub fn initial_cursor(&self) -> &S::Cursor {
        &self.initial_cursor
    }
}
