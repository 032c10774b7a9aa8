use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use super::mouse_events;
use crate::results::results_render::visible_card_count;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => mouse_events::handle_mouse(self, mouse, now),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_dialog_keys(key) {
            return;
        }

        if self.handle_global_keys(key, now) {
            return;
        }

        if self.input.textarea.input(key) {
            self.sync_query();
        }
    }

    /// Dialog takes all input while visible
    fn handle_dialog_keys(&mut self, key: KeyEvent) -> bool {
        if !self.dialog.is_visible() {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                self.dialog.dismiss();
            }
            _ => {}
        }
        true
    }

    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('r') if ctrl => {
                self.reset(now);
                true
            }
            _ if is_search_key(key) => {
                self.activate_search(now);
                true
            }
            KeyCode::Up => {
                self.scroll_results_up(1);
                true
            }
            KeyCode::Down => {
                self.scroll_results_down(1);
                true
            }
            KeyCode::PageUp => {
                self.scroll_results_up(self.page_cards());
                true
            }
            KeyCode::PageDown => {
                self.scroll_results_down(self.page_cards());
                true
            }
            _ => false,
        }
    }

    /// Cards per page, at least one
    fn page_cards(&self) -> u16 {
        let height = self.layout_regions.results.map_or(0, |r| r.height);
        u16::try_from(visible_card_count(height).max(1)).unwrap_or(1)
    }
}

/// Enter, or the control codes terminals send for it
fn is_search_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('j') | KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
