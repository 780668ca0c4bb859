//! Models for the Wafrn notification API responses.
//!
//! These types match the JSON structure returned by the `/v2` and `/v3`
//! notification endpoints. Reference tables (users, posts, emoji, ...) are
//! scoped to the page they arrived with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything carrying a creation timestamp.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;

    /// Creation time as epoch milliseconds, the unit used by paging cursors.
    fn created_at_ms(&self) -> i64 {
        self.created_at().timestamp_millis()
    }
}

macro_rules! impl_timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(impl Timestamped for $ty {
            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        })+
    };
}

// =============================================================================
// Reference data
// =============================================================================

/// A user as embedded in notification pages (no remote id).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A post ("woot").
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub content_warning: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub post_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ask {
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub user_asker: Option<String>,
    pub user_asked: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub post_id: String,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A custom emoji.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emoji {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEmojiRelation {
    pub emoji_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEmojiRelation {
    pub emoji_id: String,
    pub post_id: String,
}

/// A reaction of a user to a post, either a unicode emoji (`content`) or a
/// custom one (`emojiId`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiReaction {
    pub id: String,
    #[serde(default)]
    pub remote_id: Option<String>,
    pub post_id: String,
    pub user_id: String,
    #[serde(default)]
    pub emoji_id: Option<String>,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Emoji context attached to a page of posts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmojiRelations {
    pub emojis: Vec<Emoji>,
    pub user_emoji_relation: Vec<UserEmojiRelation>,
    pub post_emoji_relation: Vec<PostEmojiRelation>,
    pub post_emoji_reactions: Vec<EmojiReaction>,
}

// =============================================================================
// v2 substream records
// =============================================================================

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user_id: String,
    pub post_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub follower_id: String,
    #[serde(default)]
    pub followed_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quoted_post_id: String,
    pub quoter_post_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_timestamped!(Post, Tag, EmojiReaction, Like, Follow, Quote);

/// Response of `GET /v2/notificationsScroll`.
///
/// Six independently paginated substreams plus the reference data needed to
/// resolve them. `reblogs` and `mentions` are posts themselves.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationsPage {
    pub emoji_reactions: Vec<EmojiReaction>,
    pub emojis: Vec<Emoji>,
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub reblogs: Vec<Post>,
    pub likes: Vec<Like>,
    pub mentions: Vec<Post>,
    pub follows: Vec<Follow>,
    pub medias: Vec<Media>,
    pub quotes: Vec<Quote>,
    pub asks: Vec<Ask>,
}

// =============================================================================
// v3 unified stream
// =============================================================================

/// Type-specific part of a v3 notification, tagged by `notificationType`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "notificationType", rename_all = "UPPERCASE")]
pub enum NotificationV3Kind {
    Follow,
    #[serde(rename_all = "camelCase")]
    Like { post_id: String },
    #[serde(rename_all = "camelCase")]
    Rewoot { post_id: String },
    #[serde(rename_all = "camelCase")]
    Mention { post_id: String },
    #[serde(rename_all = "camelCase")]
    Quote { post_id: String },
    #[serde(rename_all = "camelCase")]
    EmojiReact {
        post_id: String,
        emoji_reaction_id: String,
    },
}

impl NotificationV3Kind {
    /// Wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationV3Kind::Follow => "FOLLOW",
            NotificationV3Kind::Like { .. } => "LIKE",
            NotificationV3Kind::Rewoot { .. } => "REWOOT",
            NotificationV3Kind::Mention { .. } => "MENTION",
            NotificationV3Kind::Quote { .. } => "QUOTE",
            NotificationV3Kind::EmojiReact { .. } => "EMOJIREACT",
        }
    }

    pub fn post_id(&self) -> Option<&str> {
        match self {
            NotificationV3Kind::Follow => None,
            NotificationV3Kind::Like { post_id }
            | NotificationV3Kind::Rewoot { post_id }
            | NotificationV3Kind::Mention { post_id }
            | NotificationV3Kind::Quote { post_id }
            | NotificationV3Kind::EmojiReact { post_id, .. } => Some(post_id),
        }
    }
}

/// A raw notification of the v3 stream.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationV3 {
    pub id: i64,
    pub notified_user_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub kind: NotificationV3Kind,
}

impl_timestamped!(NotificationV3);

/// Response of `GET /v3/notificationsScroll`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationsV3Page {
    pub notifications: Vec<NotificationV3>,
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub medias: Vec<Media>,
    pub asks: Vec<Ask>,
    pub tags: Vec<Tag>,
    pub emoji_relations: EmojiRelations,
}

// =============================================================================
// Badge counters
// =============================================================================

/// Response of `GET /v2/notificationsCount`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationBadges {
    pub asks: u64,
    pub notifications: u64,
    pub follows_awaiting_approval: u64,
    pub reports: u64,
    pub users_awaiting_approval: u64,
}
