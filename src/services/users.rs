//! Users listing.

use crate::domain::user::User;
use crate::dto::table::{TableOutcome, TableQuery};
use crate::repository::UserReader;
use crate::services::ServiceResult;
use crate::services::listing::open_table;
use crate::table::{ALL_FILTER, TableConfig, TableState};

fn searchable(user: &User) -> Vec<&str> {
    vec![user.fullname.as_str(), user.username.as_str()]
}

pub fn users_table() -> TableConfig<User> {
    TableConfig::new(searchable)
        .filter(ALL_FILTER, "All Users", |_: &User| true)
        .filter("verified", "Verified", User::is_verified)
        .filter("subscription", "Subscription", User::is_subscriber)
        .filter("moderator", "Moderators", |user: &User| user.is_moderator)
}

/// Loads the users table for the current session state.
pub fn load_users<R>(
    repo: &R,
    state: &mut TableState,
    query: &TableQuery,
) -> ServiceResult<TableOutcome<User>>
where
    R: UserReader + ?Sized,
{
    let users = repo.list_users().map_err(|err| {
        log::error!("Failed to list users: {err}");
        err
    })?;

    Ok(open_table("users", users, users_table(), state, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SampleRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn moderator_tab_uses_the_moderator_flag() {
        let repo = SampleRepository::new().unwrap();
        let mut state = TableState::default();
        let query = TableQuery {
            filter: Some("moderator".to_string()),
            ..TableQuery::default()
        };

        let outcome = load_users(&repo, &mut state, &query).unwrap();

        let ids: Vec<i32> = outcome.page.rows.items.iter().map(|u| u.id.get()).collect();
        assert_eq!(ids, vec![2, 4, 7, 10]);
        assert_eq!(state.filter, "moderator");
    }

    #[test]
    fn search_matches_username() {
        let repo = SampleRepository::new().unwrap();
        let mut state = TableState::default();
        let query = TableQuery {
            search: Some("mikec".to_string()),
            ..TableQuery::default()
        };

        let outcome = load_users(&repo, &mut state, &query).unwrap();

        assert_eq!(outcome.page.rows.total, 1);
        assert_eq!(outcome.page.rows.items[0].fullname, "Michael Chen");
    }

    #[test]
    fn repository_failure_is_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_list_users()
            .returning(|| Err(RepositoryError::Unexpected("offline".to_string())));

        let result = load_users(&repo, &mut TableState::default(), &TableQuery::default());

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
