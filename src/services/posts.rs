//! Posts listing.

use crate::domain::post::{Post, PostCategory};
use crate::dto::table::{TableOutcome, TableQuery};
use crate::repository::PostReader;
use crate::services::ServiceResult;
use crate::services::listing::open_table;
use crate::table::{ALL_FILTER, TableConfig, TableState};

fn searchable(post: &Post) -> Vec<&str> {
    vec![post.fullname.as_str(), post.username.as_str()]
}

pub fn posts_table() -> TableConfig<Post> {
    TableConfig::new(searchable)
        .filter(ALL_FILTER, "All Posts", |_: &Post| true)
        .filter("recent", "Recent", |post: &Post| {
            post.category == PostCategory::Recent
        })
        .filter("popular", "Popular", |post: &Post| {
            post.category == PostCategory::Popular
        })
        .filter("restricted", "Restricted", |post: &Post| post.is_restricted)
}

pub fn load_posts<R>(
    repo: &R,
    state: &mut TableState,
    query: &TableQuery,
) -> ServiceResult<TableOutcome<Post>>
where
    R: PostReader + ?Sized,
{
    let posts = repo.list_posts().map_err(|err| {
        log::error!("Failed to list posts: {err}");
        err
    })?;

    Ok(open_table("posts", posts, posts_table(), state, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SampleRepository;

    fn load(query: TableQuery) -> TableOutcome<Post> {
        let repo = SampleRepository::new().unwrap();
        load_posts(&repo, &mut TableState::default(), &query).unwrap()
    }

    #[test]
    fn restricted_tab_uses_the_restriction_flag() {
        let outcome = load(TableQuery {
            filter: Some("restricted".to_string()),
            ..TableQuery::default()
        });

        let ids: Vec<i32> = outcome.page.rows.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![4, 7, 10]);
    }

    #[test]
    fn popular_posts_searched_by_author() {
        let outcome = load(TableQuery {
            filter: Some("popular".to_string()),
            search: Some("sarah".to_string()),
            ..TableQuery::default()
        });

        assert_eq!(outcome.page.rows.total, 1);
        assert_eq!(outcome.page.rows.items[0].username, "sarah_jones");
    }

    #[test]
    fn second_page_of_five() {
        let outcome = load(TableQuery {
            per_page: Some(5),
            page: Some(2),
            ..TableQuery::default()
        });

        assert_eq!(outcome.page.rows.items.len(), 5);
        assert_eq!(outcome.page.summary, "Showing 6 to 10 of 10 entries");
    }
}
