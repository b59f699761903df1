//! Data sources feeding the listing pages and the handler for row actions.
//!
//! Readers hand out the full ordered record set of one page; filtering,
//! search and pagination happen in [`crate::table`]. The action dispatcher
//! receives user actions by identifier and never mutates the records it
//! served.

use crate::{
    domain::{
        action::{EntityKind, RowAction},
        chart::ChartSeries,
        insight::{BookmarkInsight, FollowInsight, StatCard, TrendStat},
        message::MessageInsight,
        music::{MusicCategory, MusicTrack, NewMusicCategory, NewMusicTrack},
        post::Post,
        report::Report,
        user::User,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod sample;

pub use sample::SampleRepository;

pub trait UserReader {
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

pub trait PostReader {
    fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
}

pub trait ReportReader {
    fn list_reports(&self) -> RepositoryResult<Vec<Report>>;
}

pub trait MessageReader {
    fn list_message_insights(&self) -> RepositoryResult<Vec<MessageInsight>>;
    fn list_message_stats(&self) -> RepositoryResult<Vec<TrendStat>>;
}

pub trait MusicReader {
    fn list_tracks(&self) -> RepositoryResult<Vec<MusicTrack>>;
    fn list_categories(&self) -> RepositoryResult<Vec<MusicCategory>>;
}

pub trait InsightReader {
    fn list_bookmark_insights(&self) -> RepositoryResult<Vec<BookmarkInsight>>;
    fn list_follow_insights(&self) -> RepositoryResult<Vec<FollowInsight>>;
    fn list_insight_stats(&self) -> RepositoryResult<Vec<TrendStat>>;
}

pub trait DashboardReader {
    fn list_stat_cards(&self) -> RepositoryResult<Vec<StatCard>>;
    fn list_chart_series(&self) -> RepositoryResult<Vec<ChartSeries>>;
}

pub trait ActionDispatcher {
    /// Whether `entity` currently has a row with `id`.
    fn row_exists(&self, entity: EntityKind, id: i32) -> RepositoryResult<bool>;
    fn dispatch(&self, action: &RowAction) -> RepositoryResult<()>;
    fn submit_track(&self, track: &NewMusicTrack) -> RepositoryResult<()>;
    fn submit_category(&self, category: &NewMusicCategory) -> RepositoryResult<()>;
}
