//! Tests for scrolling through the list façade.

mod common;

use common::{TestScrollbar, TestStyle, names, run_animation, single_list};
use listview::prelude::*;

#[test]
fn test_max_display_from_measured_rows() {
    let (list, _, _) = single_list(10);
    assert_eq!(list.max_display(), 4.0);
    assert!(list.scrollbar_visible());
}

#[test]
fn test_max_scroll_offset_with_overscroll() {
    let (mut list, _, _) = single_list(10);
    list.set_overscroll(1.0);
    assert_eq!(list.max_scroll_offset(), 7.0);

    list.scroll_to(100.0, true);
    assert_eq!(list.scroll_offset(), 7.0);
}

#[test]
fn test_clip_lower_bound() {
    let (mut list, _, _) = single_list(10);
    list.scroll_to(-5.0, true);
    assert_eq!(list.scroll_offset(), 0.0);
}

#[test]
fn test_short_list_cannot_scroll() {
    let (mut list, _, _) = single_list(2);
    assert_eq!(list.max_scroll_offset(), 0.0);
    assert!(!list.scrollbar_visible());

    list.scroll_to(3.0, true);
    assert_eq!(list.scroll_offset(), 0.0);
}

#[test]
fn test_unclipped_scroll_keeps_value() {
    let (mut list, _, _) = single_list(10);
    list.scroll_to(9.5, false);
    assert_eq!(list.scroll_offset(), 9.5);
}

#[test]
fn test_same_target_is_noop() {
    let (mut list, style, _) = single_list(20);
    list.scroll_to(3.0, true);
    let binds = style.binds();

    list.scroll_to(3.0, true);
    list.scroll_to(100.0, true);
    list.scroll_to(100.0, true);
    assert_eq!(list.scroll_offset(), 16.0);

    let after_clamp = style.binds();
    list.scroll_to(16.0, true);
    assert_eq!(style.binds(), after_clamp);
    assert!(after_clamp > binds);
}

#[test]
fn test_smooth_scroll_is_bounded() {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::single(style, clock.clone()).with_items(names(100));
    list.resize(100.0, 160.0);
    list.set_smooth_scroll_speed(20.0);
    list.set_maximum_scroll_duration(500);

    list.scroll_to(50.0, true);
    assert!(list.is_scrolling());
    assert!(clock.is_registered(list.id()));
    assert_eq!(list.scroll_offset(), 0.0);
    assert_eq!(list.scroll_target(), 50.0);

    let elapsed = run_animation(&mut list, &clock, 16.0);
    assert!(elapsed <= 1000.0, "took {}ms", elapsed);
    assert_eq!(list.scroll_offset(), 50.0);
    assert!(!list.is_scrolling());
    assert!(clock.is_idle());
}

#[test]
fn test_short_smooth_scroll_uses_nominal_speed() {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::single(style, clock.clone()).with_items(names(100));
    list.resize(100.0, 160.0);
    list.set_smooth_scroll_speed(10.0);

    list.scroll_to(2.0, true);
    list.tick(100.0);
    assert!((list.scroll_offset() - 1.0).abs() < 1e-4);
    assert!(list.tick(50.0));
    assert!(!list.tick(100.0));
    assert_eq!(list.scroll_offset(), 2.0);
}

#[test]
fn test_rearming_registers_once() {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::single(style, clock.clone()).with_items(names(100));
    list.resize(100.0, 160.0);

    list.scroll_to(10.0, true);
    list.scroll_to(20.0, true);
    assert_eq!(clock.registered(), vec![list.id()]);

    run_animation(&mut list, &clock, 16.0);
    assert_eq!(list.scroll_offset(), 20.0);
}

#[test]
fn test_disabling_smooth_scroll_snaps() {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::single(style, clock.clone()).with_items(names(100));
    list.resize(100.0, 160.0);

    list.scroll_to(30.0, true);
    list.tick(16.0);
    list.set_smooth_scroll_speed(0.0);

    assert_eq!(list.scroll_offset(), 30.0);
    assert!(!list.is_scrolling());
    assert!(!clock.is_registered(list.id()));
    assert_eq!(list.visible_rows()[0].index, 30);
}

#[test]
fn test_drop_while_scrolling_unregisters() {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::single(style, clock.clone()).with_items(names(100));
    list.resize(100.0, 160.0);

    list.scroll_to(30.0, true);
    assert!(!clock.is_idle());
    drop(list);
    assert!(clock.is_idle());
}

#[test]
fn test_ensure_visible() {
    let (mut list, _, _) = single_list(20);

    list.ensure_visible(2);
    assert_eq!(list.scroll_target(), 0.0);

    list.ensure_visible(10);
    assert_eq!(list.scroll_target(), 7.5);
    assert!(list.visible_rows().iter().any(|row| row.index == 10));

    list.ensure_visible(9);
    assert_eq!(list.scroll_target(), 7.5);

    list.ensure_visible(3);
    assert_eq!(list.scroll_target(), 3.0);
    assert_eq!(list.visible_rows()[0].index, 3);

    list.ensure_visible(99);
    assert_eq!(list.scroll_target(), 3.0);
}

#[test]
fn test_ensure_visible_last_item_is_clipped() {
    let (mut list, _, _) = single_list(20);
    list.ensure_visible(19);
    assert_eq!(list.scroll_target(), 16.0);
}

#[test]
fn test_overscroll_reclips_target() {
    let (mut list, _, _) = single_list(10);
    list.set_overscroll(2.0);
    list.scroll_to(8.0, true);
    assert_eq!(list.scroll_offset(), 8.0);

    list.set_overscroll(0.0);
    assert_eq!(list.scroll_offset(), 6.0);
}

#[test]
fn test_removal_reclips() {
    let (mut list, _, _) = single_list(10);
    list.scroll_to(6.0, true);
    list.remove(9).unwrap();
    list.remove(8).unwrap();
    assert_eq!(list.scroll_offset(), 4.0);
}

#[test]
fn test_mouse_scroll() {
    let (mut list, _, _) = single_list(10);
    list.set_scroll_distance(2.0);

    assert!(!list.mouse_scroll(1.0));
    assert!(list.mouse_scroll(-1.0));
    assert_eq!(list.scroll_offset(), 2.0);

    assert!(list.mouse_scroll(-3.0));
    assert_eq!(list.scroll_offset(), 6.0);
    assert!(!list.mouse_scroll(-1.0));

    assert!(list.mouse_scroll(1.0));
    assert_eq!(list.scroll_offset(), 4.0);
}

#[test]
fn test_scroll_by() {
    let (mut list, _, _) = single_list(10);
    list.scroll_by(2.0, true);
    list.scroll_by(1.5, true);
    assert_eq!(list.scroll_offset(), 3.5);
    list.scroll_by(-10.0, true);
    assert_eq!(list.scroll_offset(), 0.0);
}

#[test]
fn test_scrollbar_mirrors_state() {
    let (mut list, _, _) = single_list(10);
    let scrollbar = TestScrollbar::default();
    list.attach_scrollbar(scrollbar.clone());

    {
        let state = scrollbar.state.borrow();
        assert_eq!(state.maximum, 10.0);
        assert_eq!(state.page, 4.0);
        assert_eq!(state.value, 0.0);
        assert!(state.visible);
    }

    list.scrollbar_moved(3.0);
    assert_eq!(list.scroll_offset(), 3.0);
    assert_eq!(scrollbar.state.borrow().value, 3.0);

    list.set_overscroll(1.0);
    assert_eq!(scrollbar.state.borrow().maximum, 11.0);
}

#[test]
fn test_scrollbar_speed_follows_boost() {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::single(style, clock.clone()).with_items(names(100));
    list.resize(100.0, 160.0);
    let scrollbar = TestScrollbar::default();
    list.attach_scrollbar(scrollbar.clone());

    list.scroll_to(50.0, true);
    run_animation(&mut list, &clock, 16.0);

    let speeds = scrollbar.state.borrow().speeds.clone();
    assert_eq!(speeds, vec![20.0, 100.0, 20.0]);
}

#[test]
fn test_resize_reclips() {
    let (mut list, _, _) = single_list(10);
    list.scroll_to(6.0, true);
    list.resize(100.0, 320.0);
    assert_eq!(list.max_display(), 8.0);
    assert_eq!(list.scroll_offset(), 2.0);
}

#[test]
fn test_config_sets_scroll_behaviour() {
    let config = ListConfig::new()
        .with_smooth_scroll_speed(0.0)
        .with_overscroll(1.0);
    let mut list = List::single(TestStyle::new(40.0), FrameClock::new())
        .with_items(names(10))
        .with_config(&config)
        .unwrap();
    list.resize(100.0, 160.0);

    assert_eq!(list.overscroll(), 1.0);
    assert_eq!(list.smooth_scroll_speed(), 0.0);
    list.scroll_to(100.0, true);
    assert_eq!(list.scroll_offset(), 7.0);
}
