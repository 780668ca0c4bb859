//! Fixture pages served by the fake Wafrn server
//!
//! All times are on 2024-05-01, UTC.

use serde_json::{json, Value};

fn at(minute: u32) -> String {
    format!("2024-05-01T10:{:02}:00.000Z", minute)
}

fn user(id: &str) -> Value {
    json!({
        "id": id,
        "url": format!("@{}@wafrn.test", id),
        "name": format!("User {}", id),
        "avatar": format!("/avatars/{}.webp", id)
    })
}

fn post(id: &str, user_id: &str, parent_id: Option<&str>, minute: u32) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "parentId": parent_id,
        "content": format!("<p>post {}</p>", id),
        "contentWarning": "",
        "createdAt": at(minute),
        "updatedAt": at(minute)
    })
}

fn like(user_id: &str, post_id: &str, minute: u32) -> Value {
    json!({ "userId": user_id, "postId": post_id, "createdAt": at(minute), "updatedAt": at(minute) })
}

fn emoji_reaction(id: &str, user_id: &str, post_id: &str, minute: u32) -> Value {
    json!({
        "id": id,
        "remoteId": null,
        "postId": post_id,
        "userId": user_id,
        "emojiId": null,
        "content": "🦀",
        "createdAt": at(minute),
        "updatedAt": at(minute)
    })
}

/// Pages of the v2 scroll, indexed by the `page` query parameter.
///
/// Page 0 ends at 10:03 (follows), page 1 at 10:02 (likes and mentions).
/// Page 1 repeats emoji reaction `e1`, which sits on the boundary.
pub fn v2_pages() -> Vec<Value> {
    vec![
        json!({
            "likes": [like("u1", "p1", 5), like("u2", "p1", 1)],
            "follows": [{
                "followerId": "u3",
                "followedId": "me",
                "createdAt": at(3),
                "updatedAt": at(3)
            }],
            "reblogs": [post("r1", "u4", Some("p2"), 4), post("r2", "u4", Some("p1"), 2)],
            "mentions": [post("m1", "u5", None, 2)],
            "emojiReactions": [emoji_reaction("e1", "u6", "p1", 3)],
            "quotes": [{
                "quotedPostId": "p1",
                "quoterPostId": "q1",
                "createdAt": at(3),
                "updatedAt": at(3)
            }],
            "emojis": [],
            "users": [user("u1"), user("u2"), user("u3"), user("u4"), user("u5"), user("u6"), user("u7")],
            "posts": [post("p1", "me", None, 0), post("p2", "me", None, 0), post("q1", "u7", None, 3)],
            "medias": [],
            "asks": []
        }),
        json!({
            "likes": [like("u2", "p1", 2)],
            "follows": [],
            "reblogs": [],
            "mentions": [post("m1", "u5", None, 2)],
            "emojiReactions": [emoji_reaction("e1", "u6", "p1", 3), emoji_reaction("e2", "u6", "p2", 0)],
            "quotes": [],
            "emojis": [],
            "users": [user("u2"), user("u5"), user("u6")],
            "posts": [post("p1", "me", None, 0), post("p2", "me", None, 0)],
            "medias": [],
            "asks": []
        }),
    ]
}

fn v3_notification(id: i64, kind: &str, user_id: &str, minute: u32) -> Value {
    json!({
        "id": id,
        "notifiedUserId": "me",
        "userId": user_id,
        "notificationType": kind,
        "createdAt": at(minute),
        "updatedAt": at(minute)
    })
}

fn with(mut value: Value, extra: Value) -> Value {
    if let (Some(target), Some(source)) = (value.as_object_mut(), extra.as_object()) {
        for (k, v) in source {
            target.insert(k.clone(), v.clone());
        }
    }
    value
}

/// Pages of the v3 scroll, indexed by the `page` query parameter.
///
/// Notification 9 appears on both pages.
pub fn v3_pages() -> Vec<Value> {
    vec![
        json!({
            "notifications": [
                with(v3_notification(11, "LIKE", "u1", 5), json!({ "postId": "p1" })),
                v3_notification(10, "FOLLOW", "u3", 4),
                with(
                    v3_notification(9, "EMOJIREACT", "u6", 3),
                    json!({ "postId": "p1", "emojiReactionId": "e1" })
                ),
            ],
            "users": [user("u1"), user("u3"), user("u6")],
            "posts": [post("p1", "me", None, 0)],
            "medias": [],
            "asks": [],
            "tags": [],
            "emojiRelations": {
                "emojis": [],
                "userEmojiRelation": [],
                "postEmojiRelation": [],
                "postEmojiReactions": [emoji_reaction("e1", "u6", "p1", 3)]
            }
        }),
        json!({
            "notifications": [
                with(
                    v3_notification(9, "EMOJIREACT", "u6", 3),
                    json!({ "postId": "p1", "emojiReactionId": "e1" })
                ),
                with(v3_notification(8, "REWOOT", "u4", 1), json!({ "postId": "p2" })),
            ],
            "users": [user("u4"), user("u6")],
            "posts": [post("p1", "me", None, 0), post("p2", "me", None, 0)],
            "medias": [],
            "asks": [],
            "tags": [],
            "emojiRelations": {
                "emojis": [],
                "userEmojiRelation": [],
                "postEmojiRelation": [],
                "postEmojiReactions": []
            }
        }),
    ]
}

pub fn badges() -> Value {
    json!({
        "asks": 1,
        "notifications": 4,
        "followsAwaitingApproval": 2,
        "reports": 0,
        "usersAwaitingApproval": 0
    })
}
