use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::DialogState;
use crate::widgets::popup::{centered_popup, clear_area};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 8;

/// Render the visible dialog centered over `frame_area`
///
/// Returns the dialog's area, or None if no dialog is visible.
pub fn render_dialog(frame: &mut Frame, state: &DialogState, frame_area: Rect) -> Option<Rect> {
    let dialog = state.current()?;

    let area = centered_popup(frame_area, DIALOG_WIDTH, DIALOG_HEIGHT);
    clear_area(frame, area);

    let accent = Style::default().fg(Color::Red);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent)
        .title(Line::from(format!(" {} ", dialog.title)).alignment(Alignment::Center))
        .title_bottom(
            Line::from(Span::styled(
                dismiss_hint(state.pending()),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );

    let lines = vec![
        Line::from(Span::styled(
            dialog.icon.symbol(),
            accent.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(dialog.text.as_str()).alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
    Some(area)
}

/// Bottom border text, counting dialogs queued behind the visible one
fn dismiss_hint(pending: usize) -> String {
    match pending.saturating_sub(1) {
        0 => " Enter: OK ".to_string(),
        more => format!(" Enter: OK ({} more) ", more),
    }
}
