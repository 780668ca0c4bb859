//! Conversion of notification pages into the dashboard context shape, so the
//! posts referenced by notifications can go through the regular post renderer.

use serde::Serialize;

use crate::api::models::{
    Ask, EmojiRelations, Like, Media, NotificationsPage, NotificationsV3Page, Post, Quote, Tag,
    User,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUser {
    #[serde(flatten)]
    pub user: User,
    pub remote_id: Option<String>,
}

impl From<&User> for DashboardUser {
    fn from(user: &User) -> Self {
        Self {
            user: user.clone(),
            remote_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardPost {
    #[serde(flatten)]
    pub post: Post,
    pub ancestors: Vec<Post>,
}

impl From<&Post> for DashboardPost {
    fn from(post: &Post) -> Self {
        Self {
            post: post.clone(),
            ancestors: Vec::new(),
        }
    }
}

/// Posts and their context, as consumed by the dashboard renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub users: Vec<DashboardUser>,
    pub emoji_relations: EmojiRelations,
    pub likes: Vec<Like>,
    pub medias: Vec<Media>,
    pub mentions: Vec<serde_json::Value>,
    pub polls: Vec<serde_json::Value>,
    pub tags: Vec<Tag>,
    pub posts: Vec<DashboardPost>,
    pub quoted_posts: Vec<Post>,
    pub quotes: Vec<Quote>,
    pub asks: Vec<Ask>,
    pub rewoot_ids: Vec<String>,
}

impl From<&NotificationsPage> for DashboardData {
    fn from(page: &NotificationsPage) -> Self {
        let quoted_posts = page
            .posts
            .iter()
            .filter(|p| page.quotes.iter().any(|q| q.quoted_post_id == p.id))
            .cloned()
            .collect();

        Self {
            users: page.users.iter().map(DashboardUser::from).collect(),
            emoji_relations: EmojiRelations {
                emojis: page.emojis.clone(),
                user_emoji_relation: Vec::new(),
                post_emoji_relation: Vec::new(),
                post_emoji_reactions: page.emoji_reactions.clone(),
            },
            likes: page.likes.clone(),
            medias: page.medias.clone(),
            posts: page
                .mentions
                .iter()
                .chain(page.posts.iter())
                .map(DashboardPost::from)
                .collect(),
            quoted_posts,
            quotes: page.quotes.clone(),
            asks: page.asks.clone(),
            // TODO: the v2 scroll response does not say which posts are rewoots
            ..Default::default()
        }
    }
}

impl From<&NotificationsV3Page> for DashboardData {
    fn from(page: &NotificationsV3Page) -> Self {
        Self {
            users: page.users.iter().map(DashboardUser::from).collect(),
            emoji_relations: page.emoji_relations.clone(),
            medias: page.medias.clone(),
            tags: page.tags.clone(),
            posts: page.posts.iter().map(DashboardPost::from).collect(),
            asks: page.asks.clone(),
            ..Default::default()
        }
    }
}
