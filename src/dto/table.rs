//! Listing DTOs shared by every table page.

use serde::{Deserialize, Serialize};

use crate::pagination::Paginated;
use crate::table::TabularDataController;

/// Query parameters accepted by every listing page.
///
/// Absent fields leave the corresponding table state untouched.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TableQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub per_page: Option<usize>,
    pub page: Option<usize>,
    /// Selects the table on pages hosting more than one.
    pub tab: Option<String>,
}

/// Filter tab as rendered above a table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterTab {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Everything a template or API client needs to draw one table.
#[derive(Debug, Serialize)]
pub struct TablePage<T> {
    pub rows: Paginated<T>,
    pub tabs: Vec<FilterTab>,
    pub filter: &'static str,
    pub search: String,
    pub page_sizes: Vec<usize>,
    /// "Showing X to Y of Z entries".
    pub summary: String,
}

impl<T: Clone> TablePage<T> {
    pub fn from_controller(table: &TabularDataController<T>) -> Self {
        let active = table.active_filter();
        let tabs = table
            .filters()
            .iter()
            .map(|spec| FilterTab {
                key: spec.key,
                label: spec.label,
                active: spec.key == active,
            })
            .collect();
        let rows = Paginated::from(table.derive());

        Self {
            summary: rows.summary(),
            rows,
            tabs,
            filter: active,
            search: table.search_term().to_string(),
            page_sizes: table.page_sizes().to_vec(),
        }
    }
}

impl<T> TablePage<T> {
    /// Converts the rows while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> TablePage<U> {
        TablePage {
            rows: self.rows.map(f),
            tabs: self.tabs,
            filter: self.filter,
            search: self.search,
            page_sizes: self.page_sizes,
            summary: self.summary,
        }
    }
}

/// Rendered table plus whether the request changed the persisted state.
#[derive(Debug)]
pub struct TableOutcome<T> {
    pub page: TablePage<T>,
    pub state_changed: bool,
}

impl<T> TableOutcome<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> TableOutcome<U> {
        TableOutcome {
            page: self.page.map(f),
            state_changed: self.state_changed,
        }
    }
}
