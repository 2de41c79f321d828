//! Category shapes.

use serde::{Deserialize, Serialize};

/// A category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    /// Hex color without `#`.
    pub color: String,
    pub text_color: String,
    pub slug: String,
    pub topic_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<u64>,
}

/// Response of `/categories.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryList {
    pub category_list: CategoryListData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListData {
    pub categories: Vec<Category>,
}
