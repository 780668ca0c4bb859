use std::collections::HashMap;

use crate::api::models::{EmojiReaction, Post, User};

/// Id lookups over the reference tables of a single page.
///
/// Ids are only guaranteed unique within one page's batch, so an index is
/// built per page and never shared between pages.
pub struct PageIndex<'a> {
    users: HashMap<&'a str, &'a User>,
    posts: HashMap<&'a str, &'a Post>,
    emoji_reactions: HashMap<&'a str, &'a EmojiReaction>,
}

impl<'a> PageIndex<'a> {
    pub fn new(
        users: &'a [User],
        posts: &'a [Post],
        emoji_reactions: &'a [EmojiReaction],
    ) -> Self {
        Self {
            users: first_by_id(users, |u| &u.id),
            posts: first_by_id(posts, |p| &p.id),
            emoji_reactions: first_by_id(emoji_reactions, |e| &e.id),
        }
    }

    pub fn user(&self, id: &str) -> Option<&'a User> {
        self.users.get(id).copied()
    }

    pub fn post(&self, id: &str) -> Option<&'a Post> {
        self.posts.get(id).copied()
    }

    pub fn emoji_reaction(&self, id: &str) -> Option<&'a EmojiReaction> {
        self.emoji_reactions.get(id).copied()
    }
}

// Keeps the first entry for a repeated id, like a linear find would.
fn first_by_id<'a, T>(items: &'a [T], id: impl Fn(&'a T) -> &'a String) -> HashMap<&'a str, &'a T> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.entry(id(item).as_str()).or_insert(item);
    }
    map
}
