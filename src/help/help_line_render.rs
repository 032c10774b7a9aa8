//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;

pub const MAIN_HELP: &str =
    " Enter: Search | Ctrl+R: Reset | ↑/↓ PgUp/PgDn: Scroll | Esc: Quit";
pub const DIALOG_HELP: &str = " Enter/Esc: Close dialog | Ctrl+C: Quit";

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help = if app.dialog.is_visible() {
        Paragraph::new(DIALOG_HELP).style(Style::default().fg(Color::DarkGray))
    } else if let Some(warning) = &app.config_warning {
        Paragraph::new(format!(" ⚠ {} (using defaults)", warning))
            .style(Style::default().fg(Color::Yellow))
    } else {
        Paragraph::new(MAIN_HELP).style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(help, area);
}
