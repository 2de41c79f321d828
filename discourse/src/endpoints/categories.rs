//! Category endpoints.

use crate::client::DiscourseClient;
use crate::error::Result;
use crate::types::{Category, CategoryList, LatestResponse};

impl DiscourseClient {
    /// Lists the site's categories.
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        let list: CategoryList = self.get("/categories.json").await?;
        Ok(list.category_list.categories)
    }

    /// Lists the latest topics of one category.
    pub async fn get_category_topics(&self, category_id: u64) -> Result<LatestResponse> {
        self.get(&format!("/c/{category_id}/l/latest.json")).await
    }
}
