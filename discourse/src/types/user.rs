//! User, user action, and directory shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user as embedded in lists and messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Negative for system accounts.
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contains a `{size}` placeholder.
    pub avatar_template: String,
}

/// Response of `/u/{username}.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserDetail,
    #[serde(default)]
    pub user_badges: Vec<Value>,
}

/// A full user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub avatar_template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_posted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_read: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio_cooked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Response of `/user_actions.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActionsResponse {
    #[serde(default)]
    pub user_actions: Vec<UserAction>,
}

/// One entry of a user's activity stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAction {
    /// `1` like, `2` was liked, `4` new topic, `5` reply, ...
    pub action_type: u32,
    pub created_at: String,
    pub username: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_post_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_avatar_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Response of `/directory_items.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryResponse {
    pub directory_items: Vec<DirectoryItem>,
    #[serde(default)]
    pub meta: DirectoryMeta,
}

/// A user's statistics for the requested period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryItem {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_received: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_given: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics_entered: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_read: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_visited: Option<u64>,
    pub user: DirectoryUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub avatar_template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows_directory_items: Option<u64>,
    /// Relative URL of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_more_directory_items: Option<String>,
}
