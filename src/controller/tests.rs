//! Tests for the controller

use super::*;
use crate::config::ControllerConfig;
use crate::error::Error;
use crate::types::Window;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use test_case::test_case;

/// Controller wired to a listener that records every notified window
fn recording_controller(
    config: ControllerConfig,
) -> (PageController, Rc<RefCell<Vec<Window>>>) {
    let windows = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&windows);
    let controller = PageController::with_listener(config, move |w| sink.borrow_mut().push(w))
        .expect("valid config");
    (controller, windows)
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_construction_notifies_initial_window_once() {
    let (_controller, windows) = recording_controller(ControllerConfig::new(10));
    assert_eq!(*windows.borrow(), vec![Window::new(10, 0)]);
}

#[test]
fn test_construction_rejects_size_outside_options() {
    let err = PageController::with_listener(ControllerConfig::new(25), |_| {}).unwrap_err();
    assert!(matches!(err, Error::PageSizeNotAllowed { size: 25, .. }));
}

#[test]
fn test_initial_state_from_config() {
    let (controller, _) =
        recording_controller(ControllerConfig::new(30).with_total_items(90));
    let state = controller.state();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.limit, 30);
    assert_eq!(state.offset, 0);
    assert_eq!(state.total_items, 90);
}

// ============================================================================
// Page Change Tests
// ============================================================================

#[test]
fn test_page_changed_notifies_new_window() {
    let (mut controller, windows) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    controller.page_changed(Some(2));

    assert_eq!(
        *windows.borrow(),
        vec![Window::new(10, 0), Window::new(10, 10)]
    );
}

#[test]
fn test_page_changed_to_same_page_does_not_notify() {
    let (mut controller, windows) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    controller.page_changed(Some(1));

    assert_eq!(windows.borrow().len(), 1);
}

#[test]
fn test_page_changed_missing_page_means_first() {
    let (mut controller, windows) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    controller.page_changed(Some(3));
    controller.page_changed(None);

    assert_eq!(controller.state().current_page, 1);
    assert_eq!(windows.borrow().last(), Some(&Window::new(10, 0)));
}

// ============================================================================
// Page Size Change Tests
// ============================================================================

#[test]
fn test_page_size_changed_notifies_new_window() {
    let (mut controller, windows) =
        recording_controller(ControllerConfig::new(10).with_total_items(100));

    controller.page_size_changed(Some(2), Some(PageSizeInput::Count(30)));

    assert_eq!(controller.window(), Window::new(30, 30));
    assert_eq!(windows.borrow().len(), 2);
}

#[test]
fn test_page_size_changed_missing_values_use_defaults() {
    let (mut controller, _) =
        recording_controller(ControllerConfig::new(30).with_total_items(100));

    controller.page_size_changed(None, None);

    let state = controller.state();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.limit, 30);
}

#[test_case(Some(PageSizeInput::Count(50)), 50 ; "numeric size")]
#[test_case(Some(PageSizeInput::Text("30".to_string())), 30 ; "string size")]
#[test_case(Some(PageSizeInput::Text(" 50 ".to_string())), 50 ; "padded string size")]
#[test_case(Some(PageSizeInput::Text("all".to_string())), 10 ; "unparseable falls back")]
#[test_case(Some(PageSizeInput::Count(0)), 10 ; "zero falls back")]
#[test_case(None, 10 ; "missing falls back")]
fn test_page_size_coercion(size: Option<PageSizeInput>, expected: u32) {
    let (mut controller, _) =
        recording_controller(ControllerConfig::new(10).with_total_items(1000));

    controller.page_size_changed(Some(1), size);

    assert_eq!(controller.state().limit, expected);
}

#[test]
fn test_page_size_changed_out_of_range_resets() {
    let (mut controller, windows) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    // Page 5 at size 10 starts at 40, beyond the 25 known items.
    controller.page_size_changed(Some(5), Some(PageSizeInput::Count(10)));

    assert_eq!(controller.window(), Window::new(10, 0));
    // Window did not move, so only the construction notification exists.
    assert_eq!(windows.borrow().len(), 1);
}

// ============================================================================
// Total Items Tests
// ============================================================================

#[test]
fn test_total_items_changed_does_not_notify() {
    let (mut controller, windows) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    controller.page_changed(Some(3));
    assert_eq!(windows.borrow().len(), 2);

    // Shrinking the count leaves the window (10, 20) untouched even though
    // the offset now exceeds the count.
    controller.total_items_changed(5);

    assert_eq!(windows.borrow().len(), 2);
    assert_eq!(controller.state().total_items, 5);
    assert_eq!(controller.window(), Window::new(10, 20));
}

#[test]
fn test_total_items_then_size_action_reconciles() {
    let (mut controller, windows) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    controller.page_changed(Some(3));
    controller.total_items_changed(5);
    controller.page_size_changed(Some(3), Some(PageSizeInput::Count(10)));

    assert_eq!(controller.window(), Window::new(10, 0));
    assert_eq!(windows.borrow().last(), Some(&Window::new(10, 0)));
    assert_eq!(windows.borrow().len(), 3);
}

// ============================================================================
// View Tests
// ============================================================================

#[test]
fn test_view_reflects_state() {
    let (mut controller, _) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    controller.page_changed(Some(2));

    let view = controller.view();
    assert_eq!(
        view,
        PagerView {
            current_page: 2,
            page_size: 10,
            total_items: 25,
            page_size_options: vec![10, 30, 50],
        }
    );
}

#[test]
fn test_view_tracks_total_items_updates() {
    let (mut controller, _) =
        recording_controller(ControllerConfig::new(10).with_total_items(25));

    controller.total_items_changed(80);

    assert_eq!(controller.view().total_items, 80);
}

// ============================================================================
// PageSizeInput Tests
// ============================================================================

#[test]
fn test_page_size_input_from_impls() {
    assert_eq!(PageSizeInput::from(30), PageSizeInput::Count(30));
    assert_eq!(
        PageSizeInput::from("50"),
        PageSizeInput::Text("50".to_string())
    );
}

#[test]
fn test_page_size_input_untagged_serde() {
    let number: PageSizeInput = serde_json::from_str("30").unwrap();
    assert_eq!(number, PageSizeInput::Count(30));

    let text: PageSizeInput = serde_json::from_str("\"50\"").unwrap();
    assert_eq!(text, PageSizeInput::Text("50".to_string()));
}
