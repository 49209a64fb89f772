use super::*;
use crate::search::EntryId;
use crate::test_utils::test_helpers::{TEST_ENTRIES, key, key_with_mods, test_app, type_query};

#[test]
fn test_typing_updates_query_and_filter() {
    let mut app = test_app(TEST_ENTRIES);

    type_query(&mut app, "zu");

    assert_eq!(app.search.query(), "zu");
    assert_eq!(app.filter.query(), "zu");
    assert_eq!(app.filter.visible_count(), 1);
    assert!(app.view.is_visible(EntryId(2)));
    assert!(!app.view.is_visible(EntryId(1)));
}

#[test]
fn test_each_keystroke_refilters() {
    let mut app = test_app(TEST_ENTRIES);

    type_query(&mut app, "y");
    // "y" appears in "Yoga" and "gym"
    assert_eq!(app.filter.visible_count(), 2);

    type_query(&mut app, "o");
    assert_eq!(app.filter.visible_count(), 1);
}

#[test]
fn test_backspace_widens_results() {
    let mut app = test_app(TEST_ENTRIES);
    type_query(&mut app, "yoga");
    assert_eq!(app.filter.visible_count(), 1);

    for _ in 0..4 {
        handle_search_key(&mut app, key(KeyCode::Backspace));
    }

    assert_eq!(app.search.query(), "");
    assert_eq!(app.filter.visible_count(), 4);
    assert!(!app.view.no_results());
}

#[test]
fn test_ctrl_u_clears_query() {
    let mut app = test_app(TEST_ENTRIES);
    type_query(&mut app, "a.b");
    assert!(app.view.no_results());

    let changed = handle_search_key(&mut app, key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL));

    assert!(changed);
    assert_eq!(app.search.query(), "");
    assert!(!app.view.no_results());
    assert_eq!(app.filter.visible_count(), 4);
}

#[test]
fn test_cursor_movement_does_not_refilter() {
    let mut app = test_app(TEST_ENTRIES);
    type_query(&mut app, "zu");

    let changed = handle_search_key(&mut app, key(KeyCode::Left));

    assert!(!changed);
    assert_eq!(app.search.query(), "zu");
}

#[test]
fn test_special_characters_typed_literally() {
    let mut app = test_app("C++ (advanced)\nC basics\n");

    type_query(&mut app, "c+");

    assert_eq!(app.filter.visible_count(), 1);
    assert!(app.view.is_visible(EntryId(0)));
}
