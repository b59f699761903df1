//! DTOs for the insights page: bookmark and follower tables.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::action::EntityKind;
use crate::domain::insight::{BookmarkInsight, FollowInsight, TrendStat};
use crate::dto::table::TableOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightsTab {
    #[default]
    Bookmarks,
    Follows,
}

impl InsightsTab {
    /// Unknown values select the default tab.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("follows") => InsightsTab::Follows,
            _ => InsightsTab::Bookmarks,
        }
    }

    pub fn entity(self) -> EntityKind {
        match self {
            InsightsTab::Bookmarks => EntityKind::Bookmarks,
            InsightsTab::Follows => EntityKind::Follows,
        }
    }
}

/// Follower row with the ratio preformatted for display.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FollowRow {
    pub id: i32,
    pub username: String,
    pub fullname: String,
    pub followers: u32,
    pub following: u32,
    pub follow_back: String,
    pub joined_at: NaiveDate,
}

impl From<FollowInsight> for FollowRow {
    fn from(insight: FollowInsight) -> Self {
        Self {
            follow_back: insight.follow_back_percent(),
            id: insight.id.get(),
            username: insight.username,
            fullname: insight.fullname,
            followers: insight.followers,
            following: insight.following,
            joined_at: insight.joined_at,
        }
    }
}

#[derive(Debug)]
pub enum InsightsTable {
    Bookmarks(TableOutcome<BookmarkInsight>),
    Follows(TableOutcome<FollowRow>),
}

#[derive(Debug)]
pub struct InsightsPageData {
    pub stats: Vec<TrendStat>,
    pub tab: InsightsTab,
    pub table: InsightsTable,
}
