//! Assembly of the legacy v2 notification feed.
//!
//! A v2 page carries six substreams that paginate independently. Each page is
//! flattened into typed notifications, trimmed to the page end date, sorted
//! newest first, and the concatenation of all pages is deduplicated.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::cursor::notification_page_end;
use super::page_index::PageIndex;
use crate::api::models::{EmojiReaction, NotificationsPage, Post, Timestamped, User};

/// Type-specific part of a v2 notification.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotificationDetails {
    Follow,
    Like {
        post: Option<Post>,
    },
    /// `post` is the reblogged (parent) post, not the reblog itself.
    Reblog {
        post: Option<Post>,
    },
    Mention {
        post: Post,
    },
    Emoji {
        emoji: EmojiReaction,
        post: Option<Post>,
    },
    /// `post` is the quoting post.
    Quote {
        post: Option<Post>,
    },
}

impl NotificationDetails {
    pub fn type_name(&self) -> &'static str {
        match self {
            NotificationDetails::Follow => "follow",
            NotificationDetails::Like { .. } => "like",
            NotificationDetails::Reblog { .. } => "reblog",
            NotificationDetails::Mention { .. } => "mention",
            NotificationDetails::Emoji { .. } => "emoji",
            NotificationDetails::Quote { .. } => "quote",
        }
    }

    pub fn post(&self) -> Option<&Post> {
        match self {
            NotificationDetails::Follow => None,
            NotificationDetails::Mention { post } => Some(post),
            NotificationDetails::Like { post }
            | NotificationDetails::Reblog { post }
            | NotificationDetails::Emoji { post, .. }
            | NotificationDetails::Quote { post } => post.as_ref(),
        }
    }
}

/// A resolved v2 notification.
///
/// `user` is `None` when the page did not carry the referenced user.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub user: Option<User>,
    #[serde(flatten)]
    pub details: NotificationDetails,
}

impl Timestamped for Notification {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Identity of a v2 notification within a rendered list:
/// `type-userUrl-createdAt`.
pub fn notification_key(notification: &Notification) -> String {
    let url = notification
        .user
        .as_ref()
        .map(|u| u.url.as_str())
        .unwrap_or_default();
    format!(
        "{}-{}-{}",
        notification.details.type_name(),
        url,
        notification
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Notifications of a single page, trimmed to the page end date and sorted
/// newest first.
pub fn page_notifications(page: &NotificationsPage) -> Vec<Notification> {
    let index = PageIndex::new(&page.users, &page.posts, &[]);
    let user = |id: &str| index.user(id).cloned();
    let post = |id: &str| index.post(id).cloned();

    let mut notifications = Vec::with_capacity(
        page.follows.len()
            + page.emoji_reactions.len()
            + page.likes.len()
            + page.reblogs.len()
            + page.mentions.len()
            + page.quotes.len(),
    );

    notifications.extend(page.follows.iter().map(|follow| Notification {
        created_at: follow.created_at,
        updated_at: follow.updated_at,
        user: user(&follow.follower_id),
        details: NotificationDetails::Follow,
    }));
    notifications.extend(page.emoji_reactions.iter().map(|emoji| Notification {
        created_at: emoji.created_at,
        updated_at: emoji.updated_at,
        user: user(&emoji.user_id),
        details: NotificationDetails::Emoji {
            emoji: emoji.clone(),
            post: post(&emoji.post_id),
        },
    }));
    notifications.extend(page.likes.iter().map(|like| Notification {
        created_at: like.created_at,
        updated_at: like.updated_at,
        user: user(&like.user_id),
        details: NotificationDetails::Like {
            post: post(&like.post_id),
        },
    }));
    notifications.extend(page.reblogs.iter().map(|reblog| Notification {
        created_at: reblog.created_at,
        updated_at: reblog.updated_at,
        user: user(&reblog.user_id),
        details: NotificationDetails::Reblog {
            post: reblog.parent_id.as_deref().and_then(|id| post(id)),
        },
    }));
    notifications.extend(page.mentions.iter().map(|mention| Notification {
        created_at: mention.created_at,
        updated_at: mention.updated_at,
        user: user(&mention.user_id),
        details: NotificationDetails::Mention {
            post: mention.clone(),
        },
    }));
    notifications.extend(page.quotes.iter().map(|quote| {
        let quoter = index.post(&quote.quoter_post_id);
        Notification {
            created_at: quote.created_at,
            updated_at: quote.updated_at,
            user: quoter.and_then(|p| user(&p.user_id)),
            details: NotificationDetails::Quote {
                post: quoter.cloned(),
            },
        }
    }));

    if let Some(end) = notification_page_end(page) {
        notifications.retain(|n| n.created_at_ms() >= end);
    }
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    notifications
}

/// Flat notification list over all fetched pages, in fetch order, keeping the
/// first occurrence of every [`notification_key`].
pub fn notification_list(pages: &[NotificationsPage]) -> Vec<Notification> {
    let mut seen = HashSet::new();
    pages
        .iter()
        .flat_map(page_notifications)
        .filter(|n| seen.insert(notification_key(n)))
        .collect()
}
