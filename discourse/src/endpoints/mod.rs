//! Endpoint methods on [`DiscourseClient`](crate::DiscourseClient).
//!
//! Each method builds a path, picks a verb and body, and hands off to the
//! request pipeline. Caller-supplied strings are percent-encoded here; optional
//! arguments are only sent when present.
//!
//! | Area | Module |
//! |------|--------|
//! | Latest topics, topic detail, topic management | `topics` |
//! | Posts and likes | `posts` |
//! | Categories | `categories` |
//! | Chat channels and messages | `chat` |
//! | Notifications | `notifications` |
//! | Search | `search` |
//! | Profiles, activity, directory | `users` |

mod categories;
mod chat;
mod notifications;
mod posts;
mod search;
mod topics;
mod users;

pub use posts::LIKE_ACTION_TYPE_ID;
