//! Search shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `/search.json`.
///
/// Every collection is absent from the payload when it has no hits, so all of
/// them default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub posts: Vec<SearchPost>,
    #[serde(default)]
    pub topics: Vec<SearchTopic>,
    #[serde(default)]
    pub users: Vec<SearchUser>,
    #[serde(default)]
    pub categories: Vec<Value>,
    #[serde(default)]
    pub tags: Vec<Value>,
    #[serde(default)]
    pub groups: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_search_result: Option<GroupedSearchResult>,
}

/// A matching post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPost {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    pub avatar_template: String,
    pub created_at: String,
    #[serde(default)]
    pub like_count: u64,
    /// Excerpt around the match.
    pub blurb: String,
    pub post_number: u64,
    pub topic_id: u64,
}

/// A topic referenced by the matching posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTopic {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fancy_title: Option<String>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_posted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub tags: Vec<Value>,
}

/// A matching user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchUser {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub avatar_template: String,
}

/// Search bookkeeping: the term and the ids of each hit kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupedSearchResult {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_posts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_categories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_full_page_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_log_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_topic: Option<bool>,
    #[serde(default)]
    pub post_ids: Vec<u64>,
    #[serde(default)]
    pub user_ids: Vec<i64>,
    #[serde(default)]
    pub category_ids: Vec<u64>,
    #[serde(default)]
    pub tag_ids: Vec<u64>,
}
