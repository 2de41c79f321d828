//! Chat plugin shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::User;

/// A chat channel, public or direct message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChannel {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatable_id: Option<u64>,
    /// `"Category"` or `"DirectMessage"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatable_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memberships_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_channel_wide_mentions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatable: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatable_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_membership: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_upload_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threading_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_title: Option<String>,
}

/// Response of `/chat/api/me/channels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChannelsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_channels: Option<Vec<ChatChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_message_channels: Option<Vec<ChatChannel>>,
    pub channels: Vec<ChatChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_presence_channel_state: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_thread_overview: Option<Value>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub message: String,
    pub cooked: String,
    pub created_at: String,
    pub user: User,
    pub chat_channel_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Response of `/chat/api/channels/{id}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessagesResponse {
    pub messages: Vec<ChatMessage>,
    pub meta: ChatMessagesMeta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMessagesMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_load_more_past: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_load_more_future: Option<bool>,
}

/// Response of sending a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageResponse {
    /// `"OK"` on success.
    pub success: String,
    pub message_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_keep_opaque_fields() {
        let json = r#"{
            "channels": [{"id": 2, "title": "General", "meta": {"can_moderate": false}}],
            "tracking": {"channel_tracking": {}}
        }"#;

        let response: ChatChannelsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.channels[0].title, "General");
        assert_eq!(response.channels[0].meta.as_ref().unwrap()["can_moderate"], false);
        assert!(response.public_channels.is_none());
        assert!(response.tracking.is_some());
    }

    #[test]
    fn messages_deserialize() {
        let json = r#"{
            "messages": [{
                "id": 1, "message": "hi", "cooked": "<p>hi</p>",
                "created_at": "2024-01-01T00:00:00Z", "chat_channel_id": 2,
                "user": {"id": 4, "username": "sam", "avatar_template": "/a.png"}
            }],
            "meta": {"can_load_more_past": true}
        }"#;

        let response: ChatMessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.messages[0].user.username, "sam");
        assert_eq!(response.meta.can_load_more_past, Some(true));
        assert_eq!(response.meta.can_load_more_future, None);
    }
}
