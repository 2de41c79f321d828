//! Topic shapes.

use serde::{Deserialize, Serialize};

use super::post::Post;
use super::user::User;

/// A topic as it appears in topic lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub posts_count: u64,
    pub reply_count: u64,
    pub views: u64,
    pub like_count: u64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_posted_at: Option<String>,
    pub pinned: bool,
    pub visible: bool,
    pub closed: bool,
    pub archived: bool,
    pub has_summary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    pub posters: Vec<Poster>,
}

/// A participant shown next to a topic in lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poster {
    /// Negative for system accounts.
    pub user_id: i64,
    /// E.g. `"Original Poster, Most Recent Poster"`.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair_group_id: Option<u64>,
}

/// Response of `/latest.json` and category topic lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestResponse {
    pub topic_list: TopicList,
    #[serde(default)]
    pub users: Vec<User>,
}

/// The list part of a [`LatestResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicList {
    pub topics: Vec<Topic>,
}

/// A single topic with (part of) its post stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicResponse {
    pub post_stream: PostStream,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

/// Loaded posts plus the ids of every post in the topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostStream {
    pub posts: Vec<Post>,
    /// Absent when only specific posts were requested.
    #[serde(default)]
    pub stream: Vec<u64>,
}

/// Response of a topic status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicStatusResponse {
    /// `"OK"` on success.
    pub success: String,
    #[serde(default)]
    pub topic_status_update: Option<serde_json::Value>,
}
