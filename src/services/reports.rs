//! Reports listing. Tabs split reports by what was reported; there is no
//! unfiltered tab.

use crate::domain::report::Report;
use crate::dto::table::{TableOutcome, TableQuery};
use crate::repository::ReportReader;
use crate::services::ServiceResult;
use crate::services::listing::open_table;
use crate::table::{TableConfig, TableState};

fn searchable(report: &Report) -> Vec<&str> {
    vec![
        report.user_identity.as_str(),
        report.reason.as_str(),
        report.description.as_str(),
        report.target.name(),
    ]
}

pub fn reports_table() -> TableConfig<Report> {
    TableConfig::new(searchable)
        .filter("room", "Room", |report: &Report| report.target.kind() == "room")
        .filter("post", "Post", |report: &Report| report.target.kind() == "post")
        .filter("user", "User", |report: &Report| report.target.kind() == "user")
        .filter("reel", "Reel", |report: &Report| report.target.kind() == "reel")
}

pub fn load_reports<R>(
    repo: &R,
    state: &mut TableState,
    query: &TableQuery,
) -> ServiceResult<TableOutcome<Report>>
where
    R: ReportReader + ?Sized,
{
    let reports = repo.list_reports().map_err(|err| {
        log::error!("Failed to list reports: {err}");
        err
    })?;

    Ok(open_table("reports", reports, reports_table(), state, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SampleRepository;

    #[test]
    fn room_tab_is_the_default() {
        let repo = SampleRepository::new().unwrap();
        let mut state = TableState::default();

        let outcome = load_reports(&repo, &mut state, &TableQuery::default()).unwrap();

        let ids: Vec<i32> = outcome.page.rows.items.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(state.filter, "room");
        assert_eq!(outcome.page.tabs.len(), 4);
    }

    #[test]
    fn search_covers_target_name() {
        let repo = SampleRepository::new().unwrap();
        let query = TableQuery {
            filter: Some("reel".to_string()),
            search: Some("dance".to_string()),
            ..TableQuery::default()
        };

        let outcome = load_reports(&repo, &mut TableState::default(), &query).unwrap();

        assert_eq!(outcome.page.rows.total, 1);
        assert_eq!(outcome.page.rows.items[0].user_identity, "@dancer_pro");
    }
}
