//! HTTP client for the Wafrn notification endpoints.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::error::ApiError;
use super::models::{NotificationBadges, NotificationsPage, NotificationsV3Page};
use crate::notifications::cursor::{NotificationCursor, NotificationCursorV3};

/// The notification endpoints the feed depends on.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait NotificationsApi: Send + Sync {
    /// `GET /v2/notificationsScroll`, one page of the six legacy substreams.
    async fn get_notifications(
        &self,
        cursor: &NotificationCursor,
    ) -> Result<NotificationsPage, ApiError>;

    /// `GET /v3/notificationsScroll`, one page of the unified stream.
    async fn get_notifications_v3(
        &self,
        cursor: &NotificationCursorV3,
    ) -> Result<NotificationsV3Page, ApiError>;

    /// `GET /v2/notificationsCount`, unread counters since `start_scroll_ms`.
    async fn get_notification_badges(
        &self,
        start_scroll_ms: i64,
    ) -> Result<NotificationBadges, ApiError>;
}

/// Bearer-authenticated client for a Wafrn instance.
#[derive(Clone)]
pub struct WafrnClient {
    client: Client,
    base_url: String,
    token: String,
}

impl WafrnClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - API root of the instance (e.g., "https://app.wafrn.net/api")
    /// * `token` - Bearer token of the logged in user
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(base_url: String, token: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Get the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending API request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::InvalidResponse(format!("Failed to parse response of {}: {}", url, e))
            }
        })
    }
}

#[async_trait]
impl NotificationsApi for WafrnClient {
    async fn get_notifications(
        &self,
        cursor: &NotificationCursor,
    ) -> Result<NotificationsPage, ApiError> {
        self.get_json("/v2/notificationsScroll", cursor).await
    }

    async fn get_notifications_v3(
        &self,
        cursor: &NotificationCursorV3,
    ) -> Result<NotificationsV3Page, ApiError> {
        self.get_json("/v3/notificationsScroll", cursor).await
    }

    async fn get_notification_badges(
        &self,
        start_scroll_ms: i64,
    ) -> Result<NotificationBadges, ApiError> {
        self.get_json("/v2/notificationsCount", &[("startScroll", start_scroll_ms)])
            .await
    }
}
