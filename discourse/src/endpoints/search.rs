//! Full-text search.

use crate::client::DiscourseClient;
use crate::encode::PathBuilder;
use crate::error::Result;
use crate::types::{SearchOptions, SearchResponse};

impl DiscourseClient {
    /// Searches posts, topics, users, and categories.
    ///
    /// `term` accepts Discourse's advanced search syntax (`in:title`,
    /// `#category`, `@user`, ...) and is percent-encoded as a whole.
    pub async fn search(&self, term: &str, options: &SearchOptions) -> Result<SearchResponse> {
        let path = PathBuilder::new("/search.json")
            .encoded_param("q", term)
            .optional_param("page", options.page)
            .build();
        self.get(&path).await
    }
}
