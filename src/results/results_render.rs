use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::animation::CardFrame;
use crate::app::App;
use crate::movie::Movie;
use crate::widgets::popup::clear_area;

/// Rows per card: border, year/rank, cast, poster, border
pub const CARD_HEIGHT: u16 = 5;

pub const NO_RESULTS_MESSAGE: &str = "No movies found. Try another search!";
pub const LOADING_MESSAGE: &str = "Loading...";
/// Status line before any search has settled, e.g. after a reset
pub const IDLE_HINT: &str = "Press Enter to search";

/// Below this opacity a card is not drawn at all
const HIDDEN_OPACITY: f32 = 0.34;
/// Below this opacity a card is drawn dimmed
const DIM_OPACITY: f32 = 0.67;
/// Above this scale a card is drawn enlarged
const ENLARGED_SCALE: f32 = 1.25;

/// Render the loading indicator line
///
/// Shows a hint instead while nothing has been searched yet.
pub fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let status = if app.search.is_loading() {
        Paragraph::new(LOADING_MESSAGE).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )
    } else if !app.search.has_searched() {
        Paragraph::new(IDLE_HINT).style(Style::default().fg(Color::DarkGray))
    } else {
        return;
    };

    frame.render_widget(status, area);
}

/// Render the result cards, or the empty-state message
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    app.layout_regions.results = Some(area);

    let movies = app.search.results();
    if movies.is_empty() {
        if !app.search.is_loading() {
            let message =
                Paragraph::new(NO_RESULTS_MESSAGE).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(message, area);
        }
        return;
    }

    let visible = visible_card_count(area.height);
    let first = usize::from(app.results_scroll).min(movies.len().saturating_sub(1));
    let now = app.last_tick;

    for (slot, index) in (first..movies.len()).take(visible).enumerate() {
        let card_frame = app.entrance.frame(index, now);
        let base_y = area.y + slot as u16 * CARD_HEIGHT;

        let Some(card_area) = card_rect(area, base_y, card_frame) else {
            continue;
        };

        render_card(frame, card_area, &movies[index], index, card_frame);
    }
}

/// Whole cards that fit in `height` rows
pub fn visible_card_count(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT)
}

/// Where a card is drawn for its animation frame, clipped to `area`
fn card_rect(area: Rect, base_y: u16, card_frame: CardFrame) -> Option<Rect> {
    if card_frame.opacity < HIDDEN_OPACITY {
        return None;
    }

    let margin = if card_frame.scale > ENLARGED_SCALE { 0 } else { 1 };
    let y = i32::from(base_y) + card_frame.offset_y.round() as i32;
    let top = y.max(i32::from(area.y));
    let bottom = (y + i32::from(CARD_HEIGHT)).min(i32::from(area.bottom()));
    if bottom <= top {
        return None;
    }

    Some(Rect {
        x: area.x + margin,
        y: top as u16,
        width: area.width.saturating_sub(margin * 2),
        height: (bottom - top) as u16,
    })
}

fn render_card(frame: &mut Frame, area: Rect, movie: &Movie, index: usize, card_frame: CardFrame) {
    let inner_width = usize::from(area.width.saturating_sub(2));

    let mut border = Style::default().fg(Color::Blue);
    let mut text = Style::default();
    if card_frame.opacity < DIM_OPACITY {
        border = border.add_modifier(Modifier::DIM);
        text = text.add_modifier(Modifier::DIM);
    }
    let border_type = if card_frame.scale > ENLARGED_SCALE {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let title = if movie.title.is_empty() {
        format!("#{}", movie.key(index))
    } else {
        movie.title.clone()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border)
        .title(Span::styled(
            format!(" {} ", truncate_to_width(&title, inner_width.saturating_sub(2))),
            text.fg(Color::White).add_modifier(Modifier::BOLD),
        ));

    let year = movie.year.as_deref().unwrap_or("----");
    let rank = movie
        .rank
        .as_deref()
        .map(|r| format!("#{}", r))
        .unwrap_or_default();
    let cast = format!("Cast: {}", movie.actors.as_deref().unwrap_or("unknown"));
    let poster = movie.poster_url.as_deref().unwrap_or("no poster");

    let lines = vec![
        Line::from(vec![
            Span::styled(year.to_string(), text.fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(rank, text.fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(truncate_to_width(&cast, inner_width), text)),
        Line::from(Span::styled(
            truncate_to_width(poster, inner_width),
            text.fg(Color::DarkGray),
        )),
    ];

    clear_area(frame, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
