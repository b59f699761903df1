//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::action::{EntityKind, RowAction};
use crate::domain::chart::ChartSeries;
use crate::domain::insight::{BookmarkInsight, FollowInsight, StatCard, TrendStat};
use crate::domain::message::MessageInsight;
use crate::domain::music::{MusicCategory, MusicTrack, NewMusicCategory, NewMusicTrack};
use crate::domain::post::Post;
use crate::domain::report::Report;
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ActionDispatcher, DashboardReader, InsightReader, MessageReader, MusicReader, PostReader,
    ReportReader, UserReader,
};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
    }

    impl PostReader for Repository {
        fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
    }

    impl ReportReader for Repository {
        fn list_reports(&self) -> RepositoryResult<Vec<Report>>;
    }

    impl MessageReader for Repository {
        fn list_message_insights(&self) -> RepositoryResult<Vec<MessageInsight>>;
        fn list_message_stats(&self) -> RepositoryResult<Vec<TrendStat>>;
    }

    impl MusicReader for Repository {
        fn list_tracks(&self) -> RepositoryResult<Vec<MusicTrack>>;
        fn list_categories(&self) -> RepositoryResult<Vec<MusicCategory>>;
    }

    impl InsightReader for Repository {
        fn list_bookmark_insights(&self) -> RepositoryResult<Vec<BookmarkInsight>>;
        fn list_follow_insights(&self) -> RepositoryResult<Vec<FollowInsight>>;
        fn list_insight_stats(&self) -> RepositoryResult<Vec<TrendStat>>;
    }

    impl DashboardReader for Repository {
        fn list_stat_cards(&self) -> RepositoryResult<Vec<StatCard>>;
        fn list_chart_series(&self) -> RepositoryResult<Vec<ChartSeries>>;
    }

    impl ActionDispatcher for Repository {
        fn row_exists(&self, entity: EntityKind, id: i32) -> RepositoryResult<bool>;
        fn dispatch(&self, action: &RowAction) -> RepositoryResult<()>;
        fn submit_track(&self, track: &NewMusicTrack) -> RepositoryResult<()>;
        fn submit_category(&self, category: &NewMusicCategory) -> RepositoryResult<()>;
    }
}
