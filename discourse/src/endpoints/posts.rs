//! Post and like endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::client::DiscourseClient;
use crate::encode::PathBuilder;
use crate::error::Result;
use crate::types::{CreatePostResponse, Post};

/// The post action type Discourse uses for likes.
pub const LIKE_ACTION_TYPE_ID: u32 = 2;

#[derive(Serialize)]
struct NewTopic<'a> {
    title: &'a str,
    raw: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<u64>,
}

#[derive(Serialize)]
struct NewReply<'a> {
    raw: &'a str,
    topic_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_post_number: Option<u64>,
}

#[derive(Serialize)]
struct PostEdit<'a> {
    post: RawBody<'a>,
}

#[derive(Serialize)]
struct RawBody<'a> {
    raw: &'a str,
}

#[derive(Serialize)]
struct PostAction {
    id: u64,
    post_action_type_id: u32,
}

impl DiscourseClient {
    /// Fetches a single post.
    pub async fn get_post(&self, post_id: u64) -> Result<Post> {
        self.get(&format!("/posts/{post_id}.json")).await
    }

    /// Creates a topic, optionally in a category.
    pub async fn create_topic(
        &self,
        title: &str,
        raw: &str,
        category_id: Option<u64>,
    ) -> Result<CreatePostResponse> {
        let body = NewTopic {
            title,
            raw,
            category: category_id,
        };
        self.post("/posts.json", &body).await
    }

    /// Replies to a topic, optionally to a specific post in it.
    pub async fn create_post(
        &self,
        topic_id: u64,
        raw: &str,
        reply_to_post_number: Option<u64>,
    ) -> Result<CreatePostResponse> {
        let body = NewReply {
            raw,
            topic_id,
            reply_to_post_number,
        };
        self.post("/posts.json", &body).await
    }

    /// Replaces a post's markdown.
    pub async fn update_post(&self, post_id: u64, raw: &str) -> Result<()> {
        let body = PostEdit {
            post: RawBody { raw },
        };
        self.put::<_, Value>(&format!("/posts/{post_id}.json"), &body)
            .await
            .map(|_| ())
    }

    /// Deletes a post.
    pub async fn delete_post(&self, post_id: u64) -> Result<()> {
        self.delete(&format!("/posts/{post_id}.json")).await
    }

    /// Likes a post as the authenticated user.
    pub async fn like_post(&self, post_id: u64) -> Result<()> {
        let body = PostAction {
            id: post_id,
            post_action_type_id: LIKE_ACTION_TYPE_ID,
        };
        self.post::<_, Value>("/post_actions", &body).await.map(|_| ())
    }

    /// Removes the authenticated user's like from a post.
    pub async fn unlike_post(&self, post_id: u64) -> Result<()> {
        let path = PathBuilder::new(format!("/post_actions/{post_id}"))
            .param("post_action_type_id", LIKE_ACTION_TYPE_ID)
            .build();
        self.delete(&path).await
    }
}
