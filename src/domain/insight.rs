use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::InsightId;

/// Most bookmarked posts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BookmarkInsight {
    pub id: InsightId,
    pub post_title: String,
    pub author_name: String,
    pub bookmark_count: u32,
    pub like_count: u32,
    pub created_at: NaiveDate,
}

/// Follower statistics of a single account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FollowInsight {
    pub id: InsightId,
    pub username: String,
    pub fullname: String,
    pub followers: u32,
    pub following: u32,
    pub follow_back_ratio: f64,
    pub joined_at: NaiveDate,
}

impl FollowInsight {
    /// Follow-back ratio as a percentage with one decimal, e.g. `15.0%`.
    pub fn follow_back_percent(&self) -> String {
        format!("{:.1}%", self.follow_back_ratio * 100.0)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Headline figure with its change over the previous period.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrendStat {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
    pub trend: Option<Trend>,
}

/// Counter tile linking to a section of the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub count: u64,
    pub link: String,
}
