//! Request and response shapes of the Discourse API.
//!
//! Response types reproduce the upstream JSON field-for-field (snake_case,
//! as Discourse sends it). Fields the server omits in some contexts are
//! `Option`; fields whose shape the server does not pin down are kept as
//! [`serde_json::Value`].

mod category;
mod chat;
mod notification;
mod options;
mod post;
mod search;
mod topic;
mod user;

pub use category::{Category, CategoryList, CategoryListData};
pub use chat::{
    ChatChannel, ChatChannelsResponse, ChatMessage, ChatMessagesMeta, ChatMessagesResponse,
    CreateMessageResponse,
};
pub use notification::{Notification, NotificationData, NotificationsResponse};
pub use options::{
    DirectoryOptions, DirectoryPeriod, SearchOptions, TopicChanges, TopicStatusKind,
    TopicStatusUpdate, UserActionsOptions,
};
pub use post::{ActionSummary, CreatePostResponse, Post};
pub use search::{GroupedSearchResult, SearchPost, SearchResponse, SearchTopic, SearchUser};
pub use topic::{
    LatestResponse, Poster, PostStream, Topic, TopicList, TopicResponse, TopicStatusResponse,
};
pub use user::{
    DirectoryItem, DirectoryMeta, DirectoryResponse, DirectoryUser, User, UserAction,
    UserActionsResponse, UserDetail, UserResponse,
};
