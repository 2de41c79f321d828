//! Caller-supplied options and request bodies.
//!
//! Every `Option` field is left out of the request when `None`, so the server
//! applies its own default rather than receiving an explicit null.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Options for [`search`](crate::DiscourseClient::search).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub page: Option<u32>,
}

impl SearchOptions {
    /// Requests a specific result page.
    pub fn page(page: u32) -> Self {
        Self { page: Some(page) }
    }
}

/// Options for [`get_user_actions`](crate::DiscourseClient::get_user_actions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserActionsOptions {
    pub offset: Option<u32>,
    /// Action type filter, e.g. `5` for replies.
    pub filter: Option<u32>,
}

/// Time window for the user directory.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DirectoryPeriod {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    All,
}

/// Options for [`get_user_directory`](crate::DiscourseClient::get_user_directory).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryOptions {
    /// Defaults to [`DirectoryPeriod::Weekly`].
    pub period: Option<DirectoryPeriod>,
    /// Column to sort by, e.g. `"likes_received"`. Empty is the same as `None`.
    pub order: Option<String>,
    pub page: Option<u32>,
}

/// Fields to change with [`update_topic`](crate::DiscourseClient::update_topic).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TopicChanges {
    /// Changes only the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Topic flags that can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TopicStatusKind {
    Closed,
    Pinned,
    Archived,
    Visible,
}

/// Body of [`set_topic_status`](crate::DiscourseClient::set_topic_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicStatusUpdate {
    pub status: TopicStatusKind,
    pub enabled: bool,
    /// Timestamp after which the status reverts (pinning only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl TopicStatusUpdate {
    /// Turns `status` on or off with no expiry.
    pub fn new(status: TopicStatusKind, enabled: bool) -> Self {
        Self {
            status,
            enabled,
            until: None,
        }
    }
}
