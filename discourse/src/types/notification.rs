//! Notification shapes.

use serde::{Deserialize, Serialize};

/// A notification for the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub user_id: i64,
    pub notification_type: u32,
    pub read: bool,
    pub high_priority: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fancy_title: Option<String>,
    pub data: NotificationData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_user_avatar_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_user_name: Option<String>,
}

/// Type-dependent payload of a [`Notification`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Response of `/notifications.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}
