use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::dialog::render_dialog;
use crate::input::input_render::BUTTON_SLOT_WIDTH;

pub const HEADER_TITLE: &str = "Movie Collection";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [header_area, input_row, status_area, results_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [input_area, button_slot] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_SLOT_WIDTH)])
                .areas(input_row);

        let header = Paragraph::new(HEADER_TITLE)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(header, header_area);

        crate::input::input_render::render_field(self, frame, input_area);
        crate::input::input_render::render_button(self, frame, button_slot);
        crate::results::results_render::render_status(self, frame, status_area);
        crate::results::results_render::render_pane(self, frame, results_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        let frame_area = frame.area();
        self.layout_regions.dialog = render_dialog(frame, &self.dialog, frame_area);
    }
}
