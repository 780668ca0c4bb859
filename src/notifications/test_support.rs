//! Record builders for unit tests. Timestamps are epoch milliseconds.

use chrono::{DateTime, TimeZone, Utc};

use crate::api::models::{
    EmojiReaction, Follow, Like, NotificationV3, NotificationV3Kind, Post, Quote, User,
};

pub fn ts(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

pub fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        url: format!("https://app.wafrn.net/blog/{}", id),
        name: format!("User {}", id),
        avatar: String::new(),
    }
}

pub fn post(id: &str, user_id: &str, parent_id: Option<&str>, ms: i64) -> Post {
    Post {
        id: id.to_string(),
        user_id: user_id.to_string(),
        parent_id: parent_id.map(str::to_string),
        content: format!("content of {}", id),
        content_warning: String::new(),
        created_at: ts(ms),
        updated_at: Some(ts(ms)),
    }
}

pub fn like(user_id: &str, post_id: &str, ms: i64) -> Like {
    Like {
        user_id: user_id.to_string(),
        post_id: post_id.to_string(),
        created_at: ts(ms),
        updated_at: Some(ts(ms)),
    }
}

pub fn follow(follower_id: &str, ms: i64) -> Follow {
    Follow {
        follower_id: follower_id.to_string(),
        followed_id: Some("me".to_string()),
        created_at: ts(ms),
        updated_at: Some(ts(ms)),
    }
}

pub fn quote(quoted_post_id: &str, quoter_post_id: &str, ms: i64) -> Quote {
    Quote {
        quoted_post_id: quoted_post_id.to_string(),
        quoter_post_id: quoter_post_id.to_string(),
        created_at: ts(ms),
        updated_at: Some(ts(ms)),
    }
}

pub fn emoji_reaction(id: &str, user_id: &str, post_id: &str, ms: i64) -> EmojiReaction {
    EmojiReaction {
        id: id.to_string(),
        remote_id: None,
        post_id: post_id.to_string(),
        user_id: user_id.to_string(),
        emoji_id: None,
        content: "❤️".to_string(),
        created_at: ts(ms),
        updated_at: Some(ts(ms)),
    }
}

fn v3(id: i64, user_id: &str, ms: i64, kind: NotificationV3Kind) -> NotificationV3 {
    NotificationV3 {
        id,
        notified_user_id: "me".to_string(),
        user_id: user_id.to_string(),
        created_at: ts(ms),
        updated_at: Some(ts(ms)),
        kind,
    }
}

pub fn v3_follow(id: i64, user_id: &str, ms: i64) -> NotificationV3 {
    v3(id, user_id, ms, NotificationV3Kind::Follow)
}

pub fn v3_like(id: i64, user_id: &str, post_id: &str, ms: i64) -> NotificationV3 {
    v3(
        id,
        user_id,
        ms,
        NotificationV3Kind::Like {
            post_id: post_id.to_string(),
        },
    )
}

pub fn v3_emoji(
    id: i64,
    user_id: &str,
    post_id: &str,
    emoji_reaction_id: &str,
    ms: i64,
) -> NotificationV3 {
    v3(
        id,
        user_id,
        ms,
        NotificationV3Kind::EmojiReact {
            post_id: post_id.to_string(),
            emoji_reaction_id: emoji_reaction_id.to_string(),
        },
    )
}
