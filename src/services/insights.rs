//! Insights page: most bookmarked posts and follower statistics.

use crate::domain::insight::{BookmarkInsight, FollowInsight};
use crate::dto::insights::{FollowRow, InsightsPageData, InsightsTab, InsightsTable};
use crate::dto::table::TableQuery;
use crate::repository::InsightReader;
use crate::services::ServiceResult;
use crate::services::listing::open_table;
use crate::table::{TableConfig, TableState};

fn bookmark_searchable(insight: &BookmarkInsight) -> Vec<&str> {
    vec![insight.post_title.as_str(), insight.author_name.as_str()]
}

fn follow_searchable(insight: &FollowInsight) -> Vec<&str> {
    vec![insight.username.as_str(), insight.fullname.as_str()]
}

pub fn bookmarks_table() -> TableConfig<BookmarkInsight> {
    TableConfig::new(bookmark_searchable)
}

pub fn follows_table() -> TableConfig<FollowInsight> {
    TableConfig::new(follow_searchable)
}

/// Loads the trend figures and the table behind the active `tab`.
pub fn load_insights<R>(
    repo: &R,
    tab: InsightsTab,
    state: &mut TableState,
    query: &TableQuery,
) -> ServiceResult<InsightsPageData>
where
    R: InsightReader + ?Sized,
{
    let stats = repo.list_insight_stats().map_err(|err| {
        log::error!("Failed to load insight stats: {err}");
        err
    })?;

    let table = match tab {
        InsightsTab::Bookmarks => {
            let bookmarks = repo.list_bookmark_insights().map_err(|err| {
                log::error!("Failed to list bookmark insights: {err}");
                err
            })?;
            InsightsTable::Bookmarks(open_table(
                "bookmarks",
                bookmarks,
                bookmarks_table(),
                state,
                query,
            ))
        }
        InsightsTab::Follows => {
            let follows = repo.list_follow_insights().map_err(|err| {
                log::error!("Failed to list follow insights: {err}");
                err
            })?;
            InsightsTable::Follows(
                open_table("follows", follows, follows_table(), state, query)
                    .map(FollowRow::from),
            )
        }
    };

    Ok(InsightsPageData { stats, tab, table })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SampleRepository;

    #[test]
    fn follows_tab_formats_follow_back_ratio() {
        let repo = SampleRepository::new().unwrap();

        let data = load_insights(
            &repo,
            InsightsTab::Follows,
            &mut TableState::default(),
            &TableQuery::default(),
        )
        .unwrap();

        let InsightsTable::Follows(outcome) = data.table else {
            panic!("expected follows table");
        };
        let ratios: Vec<&str> = outcome
            .page
            .rows
            .items
            .iter()
            .map(|row| row.follow_back.as_str())
            .collect();
        assert_eq!(ratios, vec!["15.0%", "22.0%", "18.0%"]);
        assert_eq!(data.stats.len(), 3);
    }

    #[test]
    fn bookmarks_search_by_author() {
        let repo = SampleRepository::new().unwrap();
        let query = TableQuery {
            search: Some("react".to_string()),
            ..TableQuery::default()
        };

        let data =
            load_insights(&repo, InsightsTab::Bookmarks, &mut TableState::default(), &query)
                .unwrap();

        let InsightsTable::Bookmarks(outcome) = data.table else {
            panic!("expected bookmarks table");
        };
        assert_eq!(outcome.page.rows.total, 1);
        assert_eq!(outcome.page.rows.items[0].author_name, "react_master");
    }
}
