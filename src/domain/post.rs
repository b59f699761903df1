use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::PostId;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Text,
}

/// Feed bucket a post was sorted into.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Regular,
    Recent,
    Popular,
    Restricted,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub content_type: ContentType,
    pub username: String,
    pub fullname: String,
    pub comments: u32,
    pub likes: u32,
    pub is_restricted: bool,
    pub created_at: NaiveDate,
    pub category: PostCategory,
}
