//! Shared request-to-table plumbing used by every listing service.

use std::cell::Cell;
use std::rc::Rc;

use crate::dto::table::{TableOutcome, TablePage, TableQuery};
use crate::table::{TableConfig, TableState, TabularDataController};

/// Builds a controller over `records`, restores the session `state`,
/// applies the query and writes the resulting state back.
///
/// Query fields are applied in the order filter, search, page size, page
/// and only when present. Invalid input is logged and otherwise ignored.
/// The outcome reports a state change when a listener fired or when
/// restoring had to repair a stale snapshot.
pub fn open_table<R: Clone>(
    name: &str,
    records: Vec<R>,
    config: TableConfig<R>,
    state: &mut TableState,
    query: &TableQuery,
) -> TableOutcome<R> {
    let loaded = state.clone();
    let mut table = TabularDataController::new(records, config);
    table.restore(state);

    let changed = Rc::new(Cell::new(false));
    let flag = changed.clone();
    let table_name = name.to_string();
    let subscription = table.subscribe(move |event| {
        log::debug!("{table_name} table: {event:?}");
        flag.set(true);
    });

    if let Some(filter) = &query.filter
        && let Err(err) = table.set_filter(filter)
    {
        log::warn!("{name} table: {err}");
    }

    if let Some(search) = &query.search {
        table.set_search_term(search.trim());
    }

    if let Some(per_page) = query.per_page
        && let Err(err) = table.set_entries_per_page(per_page)
    {
        log::warn!("{name} table: {err}");
    }

    if let Some(page) = query.page
        && !table.set_page(page)
    {
        log::warn!("{name} table: page {page} is out of range");
    }

    table.unsubscribe(subscription);
    *state = table.state();

    TableOutcome {
        page: TablePage::from_controller(&table),
        state_changed: changed.get() || *state != loaded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &String) -> Vec<&str> {
        vec![value.as_str()]
    }

    fn names(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("name {i}")).collect()
    }

    fn config() -> TableConfig<String> {
        TableConfig::new(text)
            .filter("all", "All", |_: &String| true)
            .filter("odd", "Odd", |value: &String| {
                value.ends_with(['1', '3', '5', '7', '9'])
            })
    }

    #[test]
    fn empty_query_keeps_state() {
        let mut state = TableState {
            filter: "odd".to_string(),
            search: String::new(),
            per_page: 5,
            page: 2,
        };
        let before = state.clone();

        let outcome = open_table("names", names(20), config(), &mut state, &TableQuery::default());

        assert!(!outcome.state_changed);
        assert_eq!(state, before);
        assert_eq!(outcome.page.rows.page, 2);
        assert_eq!(outcome.page.filter, "odd");
    }

    #[test]
    fn search_resets_persisted_page() {
        let mut state = TableState {
            per_page: 5,
            page: 3,
            ..TableState::default()
        };
        let query = TableQuery {
            search: Some("  NAME 1 ".to_string()),
            ..TableQuery::default()
        };

        let outcome = open_table("names", names(20), config(), &mut state, &query);

        assert!(outcome.state_changed);
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "NAME 1");
        assert_eq!(outcome.page.rows.total, 11);
    }

    #[test]
    fn page_is_applied_after_page_size() {
        let mut state = TableState::default();
        let query = TableQuery {
            per_page: Some(5),
            page: Some(4),
            ..TableQuery::default()
        };

        let outcome = open_table("names", names(20), config(), &mut state, &query);

        assert_eq!(state.per_page, 5);
        assert_eq!(state.page, 4);
        assert_eq!(outcome.page.summary, "Showing 16 to 20 of 20 entries");
    }

    #[test]
    fn repaired_stale_state_is_reported_as_changed() {
        let mut state = TableState {
            filter: "archived".to_string(),
            search: String::new(),
            per_page: 5,
            page: 9,
        };

        let outcome = open_table("names", names(20), config(), &mut state, &TableQuery::default());

        assert!(outcome.state_changed);
        assert_eq!(state.filter, "all");
        assert_eq!(state.page, 1);
        assert_eq!(state.per_page, 5);
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut state = TableState::default();
        let query = TableQuery {
            filter: Some("bogus".to_string()),
            per_page: Some(7),
            page: Some(99),
            ..TableQuery::default()
        };

        let outcome = open_table("names", names(20), config(), &mut state, &query);

        assert_eq!(state, TableState::default());
        assert_eq!(outcome.page.filter, "all");
        assert!(outcome.page.tabs[0].active);
    }
}
