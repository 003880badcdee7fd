//! Data Transfer Objects - request/response types for the posts API.
//!
//! Request types keep every field optional so that a missing field becomes
//! a validation message instead of an opaque deserialization error.

use serde::{Deserialize, Serialize};

/// Author as sent by clients: `{"firstName": .., "lastName": ..}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to create a post. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub author: Option<AuthorPayload>,
    pub content: Option<String>,
}

impl CreatePostRequest {
    /// Messages for every required field that is absent or blank.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if is_blank(&self.title) {
            missing.push(missing_field("title"));
        }
        match &self.author {
            None => missing.push(missing_field("author")),
            Some(author) => {
                if is_blank(&author.first_name) {
                    missing.push(missing_field("author.firstName"));
                }
                if is_blank(&author.last_name) {
                    missing.push(missing_field("author.lastName"));
                }
            }
        }
        if is_blank(&self.content) {
            missing.push(missing_field("content"));
        }

        missing
    }
}

/// Request to update a post. Any subset of fields may be present;
/// `id` and `created` echoed back by clients are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPayload>,
}

impl UpdatePostRequest {
    /// Messages for every supplied field that is blank.
    pub fn blank_fields(&self) -> Vec<String> {
        let mut blank = Vec::new();

        if is_supplied_blank(&self.title) {
            blank.push(blank_field("title"));
        }
        if is_supplied_blank(&self.content) {
            blank.push(blank_field("content"));
        }
        if let Some(author) = &self.author {
            if is_supplied_blank(&author.first_name) {
                blank.push(blank_field("author.firstName"));
            }
            if is_supplied_blank(&author.last_name) {
                blank.push(blank_field("author.lastName"));
            }
        }

        blank
    }
}

/// Public representation of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    /// Author display name, "firstName lastName".
    pub author: String,
    pub content: String,
    /// RFC 3339 creation timestamp.
    pub created: String,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn is_supplied_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| v.trim().is_empty())
}

fn missing_field(name: &str) -> String {
    format!("Missing `{name}` in request body")
}

fn blank_field(name: &str) -> String {
    format!("`{name}` must not be empty")
}
