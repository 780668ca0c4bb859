//! Assembly of the v3 notification feed.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::page_index::PageIndex;
use crate::api::models::{
    EmojiReaction, NotificationV3, NotificationV3Kind, NotificationsV3Page, Post, Timestamped,
    User,
};

/// Resolved references of a v3 notification, per type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "notificationType", rename_all = "UPPERCASE")]
pub enum FullNotificationV3Details {
    Follow,
    Like {
        post: Option<Post>,
    },
    Rewoot {
        post: Option<Post>,
    },
    Mention {
        post: Option<Post>,
    },
    Quote {
        post: Option<Post>,
    },
    EmojiReact {
        post: Option<Post>,
        emoji: Option<EmojiReaction>,
    },
}

/// A v3 notification with its user and post resolved against its own page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullNotificationV3 {
    pub id: i64,
    pub notified_user_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub user: Option<User>,
    #[serde(flatten)]
    pub details: FullNotificationV3Details,
}

impl FullNotificationV3 {
    pub fn post(&self) -> Option<&Post> {
        match &self.details {
            FullNotificationV3Details::Follow => None,
            FullNotificationV3Details::Like { post }
            | FullNotificationV3Details::Rewoot { post }
            | FullNotificationV3Details::Mention { post }
            | FullNotificationV3Details::Quote { post }
            | FullNotificationV3Details::EmojiReact { post, .. } => post.as_ref(),
        }
    }
}

impl Timestamped for FullNotificationV3 {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Identity of a v3 notification: its server-assigned id.
pub fn notification_key_v3(notification: &NotificationV3) -> i64 {
    notification.id
}

fn resolve(notification: &NotificationV3, index: &PageIndex<'_>) -> FullNotificationV3 {
    let post = |id: &str| index.post(id).cloned();
    let details = match &notification.kind {
        NotificationV3Kind::Follow => FullNotificationV3Details::Follow,
        NotificationV3Kind::Like { post_id } => FullNotificationV3Details::Like {
            post: post(post_id),
        },
        NotificationV3Kind::Rewoot { post_id } => FullNotificationV3Details::Rewoot {
            post: post(post_id),
        },
        NotificationV3Kind::Mention { post_id } => FullNotificationV3Details::Mention {
            post: post(post_id),
        },
        NotificationV3Kind::Quote { post_id } => FullNotificationV3Details::Quote {
            post: post(post_id),
        },
        NotificationV3Kind::EmojiReact {
            post_id,
            emoji_reaction_id,
        } => FullNotificationV3Details::EmojiReact {
            post: post(post_id),
            emoji: index.emoji_reaction(emoji_reaction_id).cloned(),
        },
    };

    FullNotificationV3 {
        id: notification.id,
        notified_user_id: notification.notified_user_id.clone(),
        user_id: notification.user_id.clone(),
        created_at: notification.created_at,
        updated_at: notification.updated_at,
        user: index.user(&notification.user_id).cloned(),
        details,
    }
}

/// Resolved notifications of a single page, in server order.
pub fn page_notifications_v3(page: &NotificationsV3Page) -> Vec<FullNotificationV3> {
    let index = PageIndex::new(
        &page.users,
        &page.posts,
        &page.emoji_relations.post_emoji_reactions,
    );
    page.notifications
        .iter()
        .map(|n| resolve(n, &index))
        .collect()
}

/// Flat list over all fetched pages in fetch order. A notification id seen on
/// an earlier page is not repeated.
pub fn notification_list_v3(pages: &[NotificationsV3Page]) -> Vec<FullNotificationV3> {
    let mut seen = HashSet::new();
    pages
        .iter()
        .flat_map(|page| {
            let index = PageIndex::new(
                &page.users,
                &page.posts,
                &page.emoji_relations.post_emoji_reactions,
            );
            page.notifications
                .iter()
                .filter(|n| seen.insert(notification_key_v3(n)))
                .map(|n| resolve(n, &index))
                .collect::<Vec<_>>()
        })
        .collect()
}
