use serde::Serialize;

use crate::table::{TableView, showing_summary};

/// Page-button window: `None` entries render as an ellipsis.
pub fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One rendered page of a listing plus everything the pager needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub per_page: usize,
    pub total: usize,
    pub showing_from: usize,
    pub showing_to: usize,
}

impl<T> Paginated<T> {
    /// "Showing X to Y of Z entries".
    pub fn summary(&self) -> String {
        showing_summary(self.showing_from, self.showing_to, self.total)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            per_page: self.per_page,
            total: self.total,
            showing_from: self.showing_from,
            showing_to: self.showing_to,
        }
    }
}

impl<'a, R: Clone> From<TableView<'a, R>> for Paginated<R> {
    fn from(view: TableView<'a, R>) -> Self {
        let pages = get_pages(view.total_pages, view.current_page, 2, 2, 4, 2);

        Self {
            showing_from: view.showing_from(),
            showing_to: view.showing_to(),
            items: view.visible.into_iter().cloned().collect(),
            pages,
            page: view.current_page,
            total_pages: view.total_pages,
            per_page: view.per_page,
            total: view.filtered_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{TableConfig, TabularDataController};

    fn no_text(_: &u32) -> Vec<&str> {
        Vec::new()
    }

    #[test]
    fn no_pages_for_empty_result() {
        assert!(get_pages(0, 1, 2, 2, 4, 2).is_empty());
    }

    #[test]
    fn short_listing_has_no_ellipsis() {
        let pages = get_pages(5, 3, 2, 2, 4, 2);

        assert_eq!(pages, (1..=5).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn long_listing_collapses_both_sides() {
        let pages = get_pages(30, 15, 2, 2, 4, 2);

        assert_eq!(
            pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(13),
                Some(14),
                Some(15),
                Some(16),
                Some(17),
                Some(18),
                Some(19),
                None,
                Some(29),
                Some(30),
            ]
        );
    }

    #[test]
    fn built_from_table_view() {
        let mut table =
            TabularDataController::new((1..=12).collect::<Vec<u32>>(), TableConfig::new(no_text));
        table.set_entries_per_page(5).unwrap();
        table.set_page(3);

        let paginated = Paginated::from(table.derive());

        assert_eq!(paginated.items, vec![11, 12]);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(paginated.page, 3);
        assert_eq!(paginated.total, 12);
        assert_eq!(paginated.summary(), "Showing 11 to 12 of 12 entries");
        assert_eq!(paginated.summary(), table.derive().summary());
    }
}
