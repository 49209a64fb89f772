use crate::app::App;
use crate::config::{Config, NoticeConfig};
use crate::entries::Catalog;
use crate::test_utils::test_helpers::{TEST_ENTRIES, key, long_app, test_app, type_query};
use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;
use ratatui::style::Color;

/// Helper to create a test terminal
fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

/// Helper to render app to string
fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_full_layout() {
    let mut app = test_app(TEST_ENTRIES);
    let output = render_to_string(&mut app, 80, 16);

    assert!(output.contains("combo-filter"));
    assert!(output.contains("4/4 items"));
    assert!(output.contains("Sections"));
    assert!(output.contains("> Group Classes"));
    assert!(output.contains("Items"));
    assert!(output.contains("Search:"));
    assert!(output.contains("Esc quit"));
}

#[test]
fn test_flat_catalog_has_no_sidebar() {
    let mut app = test_app("Yoga class\nZumba session\n");
    let output = render_to_string(&mut app, 60, 12);

    assert!(!output.contains("Sections"));
    assert!(output.contains("> Yoga class"));
}

#[test]
fn test_filtered_render() {
    let mut app = test_app(TEST_ENTRIES);
    type_query(&mut app, "ZU");
    let output = render_to_string(&mut app, 80, 16);

    assert!(output.contains("1/4 items"));
    assert!(output.contains("Zumba session"));
    assert!(!output.contains("Yoga class"));
    assert!(!output.contains("No matching items found"));
}

#[test]
fn test_no_results_render() {
    let mut app = test_app(TEST_ENTRIES);
    type_query(&mut app, "a.b");
    let output = render_to_string(&mut app, 80, 16);

    assert!(output.contains("0/4 items"));
    assert!(output.contains("No matching items found"));
}

#[test]
fn test_header_style_changes_when_scrolled() {
    let mut app = long_app(4, 10);
    let mut terminal = create_test_terminal(80, 16);

    terminal.draw(|f| app.render(f)).unwrap();
    assert_eq!(terminal.backend().buffer()[(0, 0)].bg, Color::DarkGray);

    app.select_next(25);
    terminal.draw(|f| app.render(f)).unwrap();
    assert!(app.navbar.is_scrolled());
    assert_eq!(terminal.backend().buffer()[(0, 0)].bg, Color::LightBlue);
}

#[test]
fn test_sidebar_follows_scroll() {
    let mut app = long_app(4, 10);
    render_to_string(&mut app, 80, 16);

    app.select_next(25);
    let output = render_to_string(&mut app, 80, 16);
    assert!(output.contains("> Section 2"));
    assert!(!output.contains("> Section 0"));
}

#[test]
fn test_notice_popup_and_dismiss() {
    let mut config = Config::default();
    config.notices.push(NoticeConfig {
        title: "Welcome".to_string(),
        body: "Classes resume Monday.".to_string(),
        autoshow: true,
    });
    let mut app = App::new(Catalog::parse(TEST_ENTRIES).unwrap(), &config);
    app.notices.start();

    let output = render_to_string(&mut app, 80, 16);
    assert!(output.contains("Classes resume Monday."));

    app.handle_key_event(key(KeyCode::Enter));
    let output = render_to_string(&mut app, 80, 16);
    assert!(!output.contains("Classes resume Monday."));
    assert!(!app.should_quit());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Rendering never panics and always shows the search bar, whatever the
    // terminal size or query.
    #[test]
    fn prop_render_any_size(
        width in 20u16..120u16,
        height in 8u16..40u16,
        query in "[a-zA-Z .*+?()|\\[\\]]{0,6}",
    ) {
        let mut app = test_app(TEST_ENTRIES);
        type_query(&mut app, &query);

        let output = render_to_string(&mut app, width, height);
        prop_assert!(output.contains("Search"));
    }
}
