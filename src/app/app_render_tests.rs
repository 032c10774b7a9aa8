//! Tests for app_render

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::dialog::Dialog;
use crate::search::{EMPTY_QUERY_MESSAGE, SearchResponse};
use crate::test_utils::test_helpers::{
    movie, render_to_string, test_app, test_app_with_channels,
};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 24;

#[test]
fn test_renders_header_input_and_button() {
    let mut app = test_app();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Movie Collection"));
    assert!(output.contains(" Movie "));
    assert!(output.contains("Spiderman"));
    assert!(output.contains("Search"));
    assert!(output.contains("Enter: Search"));
}

#[test]
fn test_records_layout_regions() {
    let mut app = test_app();

    render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert_eq!(app.layout_regions.query_input, Some(Rect::new(0, 1, 62, 3)));
    assert_eq!(app.layout_regions.search_button, Some(Rect::new(62, 1, 18, 3)));
    assert_eq!(app.layout_regions.results, Some(Rect::new(0, 5, 80, 18)));
    assert_eq!(app.layout_regions.dialog, None);
}

#[test]
fn test_empty_state_before_first_search() {
    let mut app = test_app();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("No movies found. Try another search!"));
    assert!(output.contains("Press Enter to search"));
    assert!(!output.contains("Loading..."));
}

#[test]
fn test_loading_state() {
    let (mut app, _request_rx, _response_tx) = test_app_with_channels();
    app.run_search();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Loading..."));
    assert!(output.contains("Searching..."));
    assert!(!output.contains("No movies found"));
}

#[test]
fn test_settled_results_render_cards() {
    let (mut app, mut request_rx, response_tx) = test_app_with_channels();
    app.run_search();
    let request = request_rx.try_recv().unwrap();

    let mut first = movie("Spider-Man");
    first.year = Some("2002".to_string());
    first.rank = Some("1".to_string());
    first.actors = Some("Tobey Maguire, Kirsten Dunst".to_string());
    response_tx
        .send(SearchResponse::Success {
            request_id: request.request_id,
            movies: vec![first, movie("Spider-Man 2")],
        })
        .unwrap();

    let start = Instant::now();
    app.tick(start);
    app.tick(start + Duration::from_secs(1));

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Spider-Man"));
    assert!(output.contains("Spider-Man 2"));
    assert!(output.contains("2002"));
    assert!(output.contains("#1"));
    assert!(output.contains("Cast: Tobey Maguire, Kirsten Dunst"));
    assert!(!output.contains("Loading..."));
    assert!(!output.contains("Press Enter to search"));
}

#[test]
fn test_dialog_overlays_and_records_region() {
    let mut app = test_app();
    app.dialog.show(Dialog::error(EMPTY_QUERY_MESSAGE));

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Oops..."));
    assert!(output.contains(EMPTY_QUERY_MESSAGE));
    assert!(output.contains("Enter/Esc: Close dialog"));
    assert_eq!(app.layout_regions.dialog, Some(Rect::new(15, 8, 50, 8)));
}

#[test]
fn test_config_warning_in_help_line() {
    let mut app = test_app();
    app.config_warning = Some("Invalid config: expected `]`".to_string());

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("(using defaults)"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = test_app();
    app.dialog.show(Dialog::error("oops"));

    render_to_string(&mut app, 10, 4);
}

#[test]
fn test_reset_shows_idle_hint() {
    let (mut app, mut request_rx, response_tx) = test_app_with_channels();
    app.run_search();
    let request = request_rx.try_recv().unwrap();
    response_tx
        .send(SearchResponse::Success {
            request_id: request.request_id,
            movies: vec![movie("Heat")],
        })
        .unwrap();
    app.tick(Instant::now());

    app.reset(Instant::now());
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Press Enter to search"));
    assert!(output.contains("No movies found"));
}
