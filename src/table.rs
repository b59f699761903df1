//! Filter → search → paginate pipeline shared by every listing page.
//!
//! A [`TabularDataController`] owns one record set together with the
//! session-local UI state (active filter tab, search term, page size and
//! current page) and derives the visible page through a deterministic
//! pipeline. Any change to the filter, the search term or the page size
//! resets the current page to `1`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page-size choices offered by every listing unless configured otherwise.
pub const DEFAULT_PAGE_SIZES: &[usize] = &[5, 10, 25, 50];
/// Page size used when nothing else was selected.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Key of the unfiltered tab.
pub const ALL_FILTER: &str = "all";

/// Input validation failures reported by the controller mutators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Filter key is not part of the configured tabs.
    #[error("unknown filter key: {0}")]
    InvalidFilterKey(String),
    /// Page size is zero or not one of the configured choices.
    #[error("unsupported page size: {0}")]
    InvalidPageSize(usize),
}

/// Extracts the text fields of a record that take part in search.
pub type SearchFields<R> = fn(&R) -> Vec<&str>;

/// Named category predicate rendered as a filter tab.
pub struct FilterSpec<R> {
    pub key: &'static str,
    pub label: &'static str,
    predicate: fn(&R) -> bool,
}

impl<R> FilterSpec<R> {
    pub fn new(key: &'static str, label: &'static str, predicate: fn(&R) -> bool) -> Self {
        Self {
            key,
            label,
            predicate,
        }
    }

    /// Tab accepting every record.
    pub fn all(label: &'static str) -> Self {
        Self::new(ALL_FILTER, label, |_| true)
    }

    pub fn matches(&self, record: &R) -> bool {
        (self.predicate)(record)
    }
}

/// Per-page configuration of a [`TabularDataController`].
pub struct TableConfig<R> {
    filters: Vec<FilterSpec<R>>,
    searchable: SearchFields<R>,
    page_sizes: Vec<usize>,
    default_page_size: usize,
}

impl<R> TableConfig<R> {
    /// Creates a configuration searching the fields returned by `searchable`.
    ///
    /// Without any [`TableConfig::filter`] call the table gets a single
    /// "all" tab.
    pub fn new(searchable: SearchFields<R>) -> Self {
        Self {
            filters: Vec::new(),
            searchable,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Appends a filter tab. The first tab added is the default one.
    pub fn filter(
        mut self,
        key: &'static str,
        label: &'static str,
        predicate: fn(&R) -> bool,
    ) -> Self {
        self.filters.push(FilterSpec::new(key, label, predicate));
        self
    }

    /// Replaces the page-size choices.
    ///
    /// Zero entries are discarded; an unusable default falls back to the
    /// first remaining choice.
    pub fn page_sizes(mut self, sizes: &[usize], default_page_size: usize) -> Self {
        let sizes: Vec<usize> = sizes.iter().copied().filter(|size| *size > 0).collect();
        if sizes.is_empty() {
            return self;
        }
        self.default_page_size = if sizes.contains(&default_page_size) {
            default_page_size
        } else {
            sizes[0]
        };
        self.page_sizes = sizes;
        self
    }
}

/// Serializable snapshot of the UI state of one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub filter: String,
    pub search: String,
    pub per_page: usize,
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filter: ALL_FILTER.to_string(),
            search: String::new(),
            per_page: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

/// Change notification delivered to subscribed listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// Active filter after the change.
    FilterChanged(&'static str),
    SearchChanged,
    PageSizeChanged(usize),
    PageChanged(usize),
}

/// Handle returned by [`TabularDataController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&TableEvent)>;

/// Derived state handed to the renderer.
#[derive(Debug, Serialize)]
pub struct TableView<'a, R> {
    /// Records of the current page, in source order.
    pub visible: Vec<&'a R>,
    pub filter: &'static str,
    pub search: &'a str,
    pub filtered_count: usize,
    /// `0` when nothing matches.
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub per_page: usize,
}

impl<R> TableView<'_, R> {
    /// One-based position of the first visible record, `0` when empty.
    pub fn showing_from(&self) -> usize {
        if self.filtered_count == 0 {
            0
        } else {
            (self.start_index + 1).min(self.filtered_count)
        }
    }

    /// One-based position of the last visible record.
    pub fn showing_to(&self) -> usize {
        self.end_index.min(self.filtered_count)
    }

    /// "Showing X to Y of Z entries".
    pub fn summary(&self) -> String {
        showing_summary(self.showing_from(), self.showing_to(), self.filtered_count)
    }
}

/// Formats the "Showing X to Y of Z entries" line under a table.
pub fn showing_summary(from: usize, to: usize, total: usize) -> String {
    format!("Showing {from} to {to} of {total} entries")
}

/// Owns a record set and the filter/search/pagination state over it.
pub struct TabularDataController<R> {
    records: Vec<R>,
    config: TableConfig<R>,
    filter: usize,
    search: String,
    per_page: usize,
    page: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl<R> TabularDataController<R> {
    pub fn new(records: Vec<R>, mut config: TableConfig<R>) -> Self {
        if config.filters.is_empty() {
            config.filters.push(FilterSpec::all("All"));
        }
        let per_page = config.default_page_size;

        Self {
            records,
            config,
            filter: 0,
            search: String::new(),
            per_page,
            page: 1,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filters(&self) -> &[FilterSpec<R>] {
        &self.config.filters
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.config.page_sizes
    }

    pub fn active_filter(&self) -> &'static str {
        self.config.filters[self.filter].key
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn entries_per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Activates the filter tab named `key` and resets to the first page.
    ///
    /// An unknown key activates the default tab instead and is reported as
    /// [`TableError::InvalidFilterKey`].
    pub fn set_filter(&mut self, key: &str) -> Result<(), TableError> {
        let (index, result) = match self.filter_index(key) {
            Some(index) => (index, Ok(())),
            None => (0, Err(TableError::InvalidFilterKey(key.to_string()))),
        };

        self.filter = index;
        self.page = 1;
        self.notify(&TableEvent::FilterChanged(self.active_filter()));

        result
    }

    /// Replaces the search term and resets to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
        self.notify(&TableEvent::SearchChanged);
    }

    /// Changes the page size and resets to the first page.
    ///
    /// Sizes outside the configured choices are rejected and leave the
    /// state untouched.
    pub fn set_entries_per_page(&mut self, per_page: usize) -> Result<(), TableError> {
        if per_page == 0 || !self.config.page_sizes.contains(&per_page) {
            return Err(TableError::InvalidPageSize(per_page));
        }

        self.per_page = per_page;
        self.page = 1;
        self.notify(&TableEvent::PageSizeChanged(per_page));
        Ok(())
    }

    /// Moves to `page` when it lies within `1..=max(total_pages, 1)`.
    ///
    /// Returns `false` and keeps the current page otherwise.
    pub fn set_page(&mut self, page: usize) -> bool {
        let last_page = self.total_pages().max(1);
        if page == 0 || page > last_page {
            return false;
        }

        self.page = page;
        self.notify(&TableEvent::PageChanged(page));
        true
    }

    /// Snapshot of the current UI state.
    pub fn state(&self) -> TableState {
        TableState {
            filter: self.active_filter().to_string(),
            search: self.search.clone(),
            per_page: self.per_page,
            page: self.page,
        }
    }

    /// Re-applies a snapshot taken by [`TabularDataController::state`].
    ///
    /// Unknown filters and page sizes fall back to the defaults and an
    /// out-of-range page falls back to `1`. Listeners are not notified.
    pub fn restore(&mut self, state: &TableState) {
        self.filter = self.filter_index(&state.filter).unwrap_or(0);
        self.search = state.search.clone();
        self.per_page = if self.config.page_sizes.contains(&state.per_page) {
            state.per_page
        } else {
            self.config.default_page_size
        };
        self.page = 1;

        let last_page = self.total_pages().max(1);
        if (1..=last_page).contains(&state.page) {
            self.page = state.page;
        }
    }

    /// Registers a listener called after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Derives the visible page and the pagination metadata.
    pub fn derive(&self) -> TableView<'_, R> {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        let start_index = (self.page - 1) * self.per_page;
        let end_index = start_index + self.per_page;

        let visible = filtered
            .into_iter()
            .skip(start_index)
            .take(self.per_page)
            .collect();

        TableView {
            visible,
            filter: self.active_filter(),
            search: &self.search,
            filtered_count,
            total_pages: filtered_count.div_ceil(self.per_page),
            current_page: self.page,
            start_index,
            end_index,
            per_page: self.per_page,
        }
    }

    /// Records passing the active filter and the search term, ignoring
    /// pagination.
    pub fn filtered(&self) -> Vec<&R> {
        let filter = &self.config.filters[self.filter];
        let needle = self.search.to_lowercase();

        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .filter(|record| needle.is_empty() || self.matches_search(record, &needle))
            .collect()
    }

    fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.per_page)
    }

    fn matches_search(&self, record: &R, needle: &str) -> bool {
        (self.config.searchable)(record)
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    fn filter_index(&self, key: &str) -> Option<usize> {
        self.config.filters.iter().position(|spec| spec.key == key)
    }

    fn notify(&mut self, event: &TableEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}
