//! Mouse handling
//!
//! Hover drives the button's grow animation; clicks activate the button or
//! close the dialog; the wheel scrolls results.

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved => handle_hover(app, region, now),
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, region, now),
        MouseEventKind::ScrollDown if region == Some(Region::Results) => {
            app.scroll_results_down(1);
        }
        MouseEventKind::ScrollUp if region == Some(Region::Results) => {
            app.scroll_results_up(1);
        }
        _ => {}
    }
}

/// Grow the button while the pointer is over it
///
/// The dialog hides the button, so hovering through it counts as leaving.
fn handle_hover(app: &mut App, region: Option<Region>, now: Instant) {
    let over_button = region == Some(Region::SearchButton) && !app.dialog.is_visible();

    if over_button && !app.button.is_hovered() {
        app.button.hover_enter(now);
    } else if !over_button && app.button.is_hovered() {
        app.button.hover_leave(now);
    }
}

fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    if app.dialog.is_visible() {
        if region == Some(Region::Dialog) {
            app.dialog.dismiss();
        }
        return;
    }

    if region == Some(Region::SearchButton) {
        app.activate_search(now);
    }
}
