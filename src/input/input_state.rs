use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line query editor
pub struct InputState {
    pub textarea: TextArea<'static>,
    pub scroll_offset: usize,
}

impl InputState {
    pub fn new(initial: &str) -> Self {
        let mut textarea = TextArea::new(vec![initial.to_string()]);

        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);

        Self {
            textarea,
            scroll_offset: 0,
        }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Cursor column in characters
    pub fn cursor_col(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Replace the whole query, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
        self.scroll_offset = 0;
    }

    /// Keep the cursor inside a viewport `viewport_width` characters wide
    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let cursor_col = self.cursor_col();
        let text_length = self.query().chars().count();

        let mut new_scroll = self.scroll_offset;

        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
