//! Post shapes.

use serde::{Deserialize, Serialize};

/// A post inside a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub username: String,
    pub created_at: String,
    /// Rendered HTML.
    pub cooked: String,
    /// Markdown source; only present when requested with `include_raw=1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub post_number: u64,
    pub post_type: u32,
    pub reply_count: u64,
    pub quote_count: u64,
    pub reads: u64,
    pub score: f64,
    pub topic_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yours: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_summary: Option<Vec<ActionSummary>>,
}

/// Per-action counters on a post (like, flag, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    /// The post action type; `2` is a like.
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_act: Option<bool>,
}

/// Response of creating a topic or a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    pub avatar_template: String,
    pub created_at: String,
    pub cooked: String,
    pub post_number: u64,
    pub post_type: u32,
    pub updated_at: String,
    pub reply_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_post_number: Option<u64>,
    pub quote_count: u64,
    pub topic_id: u64,
    pub topic_slug: String,
}
