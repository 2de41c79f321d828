//! Topic endpoints.

use crate::client::DiscourseClient;
use crate::encode::PathBuilder;
use crate::error::Result;
use crate::types::{LatestResponse, TopicChanges, TopicResponse, TopicStatusResponse, TopicStatusUpdate};

impl DiscourseClient {
    /// Fetches the first page of latest topics.
    pub async fn get_latest(&self) -> Result<LatestResponse> {
        self.get_latest_page(0).await
    }

    /// Fetches a page of latest topics, starting at `0`.
    pub async fn get_latest_page(&self, page: u32) -> Result<LatestResponse> {
        let path = PathBuilder::new("/latest.json").param("page", page).build();
        self.get(&path).await
    }

    /// Fetches a topic with its first posts, including raw markdown.
    pub async fn get_topic(&self, topic_id: u64) -> Result<TopicResponse> {
        self.get_topic_from_post(topic_id, None).await
    }

    /// Fetches a topic, optionally starting the post stream after
    /// `after_post_number`.
    pub async fn get_topic_from_post(
        &self,
        topic_id: u64,
        after_post_number: Option<u64>,
    ) -> Result<TopicResponse> {
        let base = match after_post_number {
            Some(post_number) => format!("/t/{topic_id}/{post_number}.json"),
            None => format!("/t/{topic_id}.json"),
        };
        let path = PathBuilder::new(base).param("include_raw", 1).build();
        self.get(&path).await
    }

    /// Fetches specific posts of a topic by post id.
    ///
    /// With an empty `post_ids` the server picks the posts.
    pub async fn get_topic_posts(&self, topic_id: u64, post_ids: &[u64]) -> Result<TopicResponse> {
        let path = post_ids
            .iter()
            .fold(
                PathBuilder::new(format!("/t/{topic_id}/posts.json")).param("include_raw", 1),
                |path, id| path.param("post_ids[]", id),
            )
            .build();
        self.get(&path).await
    }

    /// Changes a topic's title, category, or tags.
    ///
    /// Only the fields set in `changes` are sent.
    pub async fn update_topic(&self, topic_id: u64, changes: &TopicChanges) -> Result<TopicResponse> {
        self.put(&format!("/t/-/{topic_id}.json"), changes).await
    }

    /// Closes, pins, archives, or unlists a topic (or reverses it).
    pub async fn set_topic_status(
        &self,
        topic_id: u64,
        status: &TopicStatusUpdate,
    ) -> Result<TopicStatusResponse> {
        self.put(&format!("/t/{topic_id}/status.json"), status).await
    }

    /// Deletes a topic.
    pub async fn delete_topic(&self, topic_id: u64) -> Result<()> {
        self.delete(&format!("/t/{topic_id}.json")).await
    }
}
