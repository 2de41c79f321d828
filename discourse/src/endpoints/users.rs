//! User profile, activity, and directory endpoints.

use crate::client::DiscourseClient;
use crate::encode::{PathBuilder, encode_component};
use crate::error::Result;
use crate::types::{DirectoryOptions, DirectoryResponse, UserActionsOptions, UserActionsResponse, UserResponse};

impl DiscourseClient {
    /// Fetches a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<UserResponse> {
        self.get(&format!("/u/{}.json", encode_component(username))).await
    }

    /// Fetches a user's activity stream.
    pub async fn get_user_actions(
        &self,
        username: &str,
        options: &UserActionsOptions,
    ) -> Result<UserActionsResponse> {
        let path = PathBuilder::new("/user_actions.json")
            .encoded_param("username", username)
            .optional_param("offset", options.offset)
            .optional_param("filter", options.filter)
            .build();
        self.get(&path).await
    }

    /// Fetches the user directory for a period (weekly unless set).
    pub async fn get_user_directory(&self, options: &DirectoryOptions) -> Result<DirectoryResponse> {
        let period = options.period.unwrap_or_default();
        let order = options.order.as_deref().filter(|order| !order.is_empty());

        let mut path = PathBuilder::new("/directory_items.json").param("period", period);
        if let Some(order) = order {
            path = path.encoded_param("order", order);
        }
        let path = path.optional_param("page", options.page).build();
        self.get(&path).await
    }
}
