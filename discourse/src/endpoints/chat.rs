//! Chat plugin endpoints.

use serde::Serialize;

use crate::client::DiscourseClient;
use crate::error::Result;
use crate::types::{ChatChannelsResponse, ChatMessagesResponse, CreateMessageResponse};

#[derive(Serialize)]
struct NewMessage<'a> {
    message: &'a str,
}

impl DiscourseClient {
    /// Lists the channels the authenticated user is a member of.
    pub async fn get_user_channels(&self) -> Result<ChatChannelsResponse> {
        self.get("/chat/api/me/channels").await
    }

    /// Fetches recent messages of a channel.
    pub async fn get_channel_messages(&self, channel_id: u64) -> Result<ChatMessagesResponse> {
        self.get(&format!("/chat/api/channels/{channel_id}/messages")).await
    }

    /// Posts a message to a channel.
    pub async fn send_chat_message(&self, channel_id: u64, message: &str) -> Result<CreateMessageResponse> {
        self.post(&format!("/chat/{channel_id}"), &NewMessage { message })
            .await
    }
}
