use crate::client::DiscourseClient;
use crate::error::Result;
use crate::types::NotificationsResponse;

impl DiscourseClient {
    /// Fetches the authenticated user's notifications.
    pub async fn get_notifications(&self) -> Result<NotificationsResponse> {
        self.get("/notifications.json").await
    }
}
