use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDescriptor {
    pub title: String,
    pub content: String,
    /// Free-form category label ("General", "Doubt", ...).
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDescriptor {
    pub post_id: u64,
    pub content: String,
}

/// The only vote direction the portal supports.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteKind {
    Upvote,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VoteDescriptor {
    pub vote_type: VoteKind,
}
