pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A forum post. Comments are not embedded; they are fetched lazily per
/// post through the comments endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// The only id of this post.
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Display name of the author.
    pub user_name: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub comment_count: u64,
}

/// A comment under a post. At most one comment per post is accepted as
/// the answer; the backend enforces this, clients only mirror it.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The only id of this comment.
    pub id: u64,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub accepted: bool,
}
