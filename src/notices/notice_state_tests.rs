//! Tests for notice_state

use super::*;

fn configured(entries: &[(&str, &str, bool)]) -> Vec<NoticeConfig> {
    entries
        .iter()
        .map(|(title, body, autoshow)| NoticeConfig {
            title: title.to_string(),
            body: body.to_string(),
            autoshow: *autoshow,
        })
        .collect()
}

#[test]
fn test_only_autoshow_notices_are_queued() {
    let queue = NoticeQueue::from_config(&configured(&[
        ("One", "first", true),
        ("Two", "second", false),
        ("Three", "third", true),
    ]));

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.fallback_text(), "first\n\nthird");
}

#[test]
fn test_nothing_shown_before_start() {
    let queue = NoticeQueue::from_config(&configured(&[("One", "first", true)]));
    assert!(!queue.is_visible());
    assert!(queue.current().is_none());
}

#[test]
fn test_notices_are_shown_in_order() {
    let mut queue = NoticeQueue::from_config(&configured(&[
        ("One", "first", true),
        ("Two", "second", true),
    ]));

    queue.start();
    assert_eq!(queue.current().unwrap().title, "One");
    assert_eq!(queue.position(), Some((1, 2)));

    queue.dismiss();
    assert_eq!(queue.current().unwrap().title, "Two");
    assert_eq!(queue.position(), Some((2, 2)));

    queue.dismiss();
    assert!(!queue.is_visible());
    assert_eq!(queue.position(), None);

    // Further dismissals and restarts are no-ops
    queue.dismiss();
    queue.start();
    assert!(!queue.is_visible());
}

#[test]
fn test_start_on_empty_queue() {
    let mut queue = NoticeQueue::new();
    queue.start();
    assert!(queue.is_empty());
    assert!(!queue.is_visible());
    assert_eq!(queue.fallback_text(), "");
}

#[test]
fn test_start_twice_does_not_rewind() {
    let mut queue = NoticeQueue::from_config(&configured(&[
        ("One", "first", true),
        ("Two", "second", true),
    ]));
    queue.start();
    queue.dismiss();
    queue.start();
    assert_eq!(queue.current().unwrap().title, "Two");
}

#[test]
fn test_warning_goes_first() {
    let mut queue = NoticeQueue::from_config(&configured(&[("One", "first", true)]));
    queue.push_front(Notice::warning("Invalid config: bad value"));
    queue.start();

    let shown = queue.current().unwrap();
    assert_eq!(shown.kind, NoticeKind::Warning);
    assert_eq!(shown.body, "Invalid config: bad value");

    queue.dismiss();
    assert_eq!(queue.current().unwrap().title, "One");
}

#[test]
fn test_push_front_while_showing_keeps_current() {
    let mut queue = NoticeQueue::from_config(&configured(&[("One", "first", true)]));
    queue.start();
    queue.push_front(Notice::warning("late"));

    assert_eq!(queue.current().unwrap().title, "One");
}

#[test]
fn test_fallback_text_trims_bodies() {
    let queue = NoticeQueue::from_config(&configured(&[
        ("One", "  first line\n", true),
        ("Two", "\n second ", true),
    ]));
    assert_eq!(queue.fallback_text(), "first line\n\nsecond");
}

#[test]
fn test_kind_colors_differ() {
    assert_ne!(NoticeKind::Info.border_color(), NoticeKind::Warning.border_color());
    assert_eq!(NoticeKind::default(), NoticeKind::Info);
}
