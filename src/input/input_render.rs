//! Query field and search button rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::popup::centered_horizontally;

/// Button width at rest, borders included
pub const BUTTON_BASE_WIDTH: u16 = 14;

/// Room reserved for the button at its largest (hover) scale
pub const BUTTON_SLOT_WIDTH: u16 = 18;

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

/// Render the query input field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let viewport_width = area.width.saturating_sub(2) as usize;
    app.input.calculate_scroll_offset(viewport_width);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Movie ")
        .border_style(Style::default().fg(Color::Cyan));

    let line = if app.input.query().is_empty() {
        Line::from(vec![
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled("Enter movie name", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(cursor_spans(
            app.input.query(),
            app.input.cursor_col(),
            app.input.scroll_offset,
            viewport_width,
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
    app.layout_regions.query_input = Some(area);
}

/// Visible slice of `text` with the cursor cell reversed
fn cursor_spans(
    text: &str,
    cursor_col: usize,
    scroll_offset: usize,
    viewport_width: usize,
) -> Vec<Span<'static>> {
    let visible: Vec<char> = text
        .chars()
        .skip(scroll_offset)
        .take(viewport_width)
        .collect();
    let cursor = cursor_col.saturating_sub(scroll_offset);

    let before: String = visible.iter().take(cursor).collect();
    let at: String = visible
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = visible.iter().skip(cursor + 1).collect();

    vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]
}

/// Render the search button inside its slot, sized by its current scale
pub fn render_button(app: &mut App, frame: &mut Frame, slot: Rect) {
    let loading = app.search.is_loading();

    let scaled = (f32::from(BUTTON_BASE_WIDTH) * app.button.scale()).round() as u16;
    let area = centered_horizontally(slot, scaled.max(4));

    let (label, color) = if loading {
        (SEARCHING_LABEL, Color::DarkGray)
    } else if app.button.is_hovered() {
        (SEARCH_LABEL, Color::Yellow)
    } else {
        (SEARCH_LABEL, Color::Cyan)
    };

    let mut text_style = Style::default().fg(color);
    if !loading {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    let button = Paragraph::new(Line::from(Span::styled(label, text_style)))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(button, area);
    app.layout_regions.search_button = Some(slot);
}
