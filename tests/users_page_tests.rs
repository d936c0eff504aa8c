// tests/users_page_tests.rs - Logic tests for the users listing screen
//
// The users table filters by name/email substring and paginates with a
// selectable page size; no sorting, remote order preserved.

use store_admin::fixtures::sample_users;
use store_admin::web_app::collection::{page_count, page_view};
use store_admin::web_app::model::User;

#[test]
fn test_default_control_state() {
    let search = String::new();
    let page = 0_usize;
    let page_size = 5_usize;

    assert!(search.is_empty());
    assert_eq!(page, 0);
    assert_eq!(page_size, 5);
}

#[test]
fn test_table_rows_keep_remote_order() {
    let users = sample_users();
    let view = page_view(&users, |u: &User| u.matches_search(""), 0, 5);
    let expected: Vec<i32> = users.iter().take(5).map(|u| u.id).collect();
    let actual: Vec<i32> = view.items.iter().map(|u| u.id).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_search_matches_name_or_email() {
    let users = sample_users();

    let by_name = page_view(&users, |u: &User| u.matches_search("david"), 0, 25);
    assert!(by_name.total >= 2);
    for user in &by_name.items {
        assert!(user.matches_search("david"));
    }

    let by_email = page_view(&users, |u: &User| u.matches_search("morrison@"), 0, 25);
    assert_eq!(by_email.total, 1);
}

#[test]
fn test_search_change_resets_page_index() {
    let mut page = 1_usize;
    let mut search = String::new();

    search.push_str("kevin");
    page = 0;

    assert_eq!(search, "kevin");
    assert_eq!(page, 0);
}

#[test]
fn test_page_size_change_resets_page_index() {
    let mut page = 1_usize;
    let mut page_size = 5_usize;

    page_size = 25;
    page = 0;

    assert_eq!(page_size, 25);
    assert_eq!(page, 0);
}

#[test]
fn test_rows_per_page_options_cover_the_collection() {
    let users = sample_users();
    for page_size in [5_usize, 10, 25] {
        let pages = page_count(users.len(), page_size);
        let mut seen = 0;
        for page in 0..pages {
            seen += page_view(&users, |u: &User| u.matches_search(""), page, page_size)
                .items
                .len();
        }
        assert_eq!(seen, users.len(), "page size {page_size}");
    }
}

#[test]
fn test_filtered_total_drives_the_pager() {
    let users = sample_users();
    let view = page_view(&users, |u: &User| u.matches_search("david"), 0, 5);
    assert_eq!(view.page_count, page_count(view.total, 5));
    assert!(view.page_count <= page_count(users.len(), 5));
}

#[test]
fn test_empty_search_result_renders_empty_table() {
    let users = sample_users();
    let view = page_view(&users, |u: &User| u.matches_search("zzz"), 0, 5);
    assert!(view.items.is_empty());
    assert_eq!(view.total, 0);
    assert_eq!(view.page_count, 0);
}
