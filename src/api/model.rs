// Wire models for the posts/comments REST resources
//
// Field names follow the remote service's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Payload for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

/// Payload for replacing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedPost {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl UpdatedPost {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

/// A post as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Payload for creating a comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub name: String,
    pub body: String,
    pub email: String,
    pub post_id: u64,
}

impl NewComment {
    pub fn new(
        name: impl Into<String>,
        body: impl Into<String>,
        email: impl Into<String>,
        post_id: u64,
    ) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            email: email.into(),
            post_id,
        }
    }
}

/// A comment as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: u64,
}
