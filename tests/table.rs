use pushkind_admin::repository::{PostReader, SampleRepository, UserReader};
use pushkind_admin::services::posts::posts_table;
use pushkind_admin::services::users::users_table;
use pushkind_admin::table::{TableEvent, TabularDataController};

#[test]
fn every_user_tab_is_partitioned_by_pagination() {
    let repo = SampleRepository::new().unwrap();
    let mut table = TabularDataController::new(repo.list_users().unwrap(), users_table());
    let keys: Vec<&'static str> = table.filters().iter().map(|spec| spec.key).collect();

    for key in keys {
        for per_page in table.page_sizes().to_vec() {
            table.set_filter(key).unwrap();
            table.set_entries_per_page(per_page).unwrap();

            let expected: Vec<i32> = table.filtered().iter().map(|user| user.id.get()).collect();
            let total_pages = table.derive().total_pages;

            let mut seen = Vec::new();
            for page in 1..=total_pages {
                assert!(table.set_page(page));
                let view = table.derive();
                assert!(view.visible.len() <= per_page);
                seen.extend(view.visible.iter().map(|user| user.id.get()));
            }

            assert_eq!(seen, expected, "{key} by {per_page}");
        }
    }
}

#[test]
fn narrowing_filter_from_last_page_lands_on_first() {
    let repo = SampleRepository::new().unwrap();
    let mut table = TabularDataController::new(repo.list_posts().unwrap(), posts_table());
    table.set_entries_per_page(5).unwrap();
    assert!(table.set_page(2));

    table.set_filter("restricted").unwrap();
    let view = table.derive();

    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.summary(), "Showing 1 to 3 of 3 entries");
}

#[test]
fn listener_sees_fallback_filter() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let repo = SampleRepository::new().unwrap();
    let mut table = TabularDataController::new(repo.list_posts().unwrap(), posts_table());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    table.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    assert!(table.set_filter("archived").is_err());

    assert_eq!(*events.borrow(), vec![TableEvent::FilterChanged("all")]);
    assert_eq!(table.derive().filtered_count, 10);
}
