use std::collections::VecDeque;

/// Title shared by all error dialogs
pub const DIALOG_TITLE: &str = "Oops...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Error,
}

impl DialogIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            DialogIcon::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub icon: DialogIcon,
    pub title: String,
    pub text: String,
}

impl Dialog {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            icon: DialogIcon::Error,
            title: DIALOG_TITLE.to_string(),
            text: text.into(),
        }
    }
}

/// Queue of dialogs; the front one is on screen
#[derive(Debug, Default)]
pub struct DialogState {
    queue: VecDeque<Dialog>,
    shown_count: usize,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, dialog: Dialog) {
        log::debug!("Dialog: {}", dialog.text);
        self.queue.push_back(dialog);
        self.shown_count += 1;
    }

    pub fn current(&self) -> Option<&Dialog> {
        self.queue.front()
    }

    pub fn is_visible(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Close the visible dialog, revealing the next queued one
    pub fn dismiss(&mut self) -> Option<Dialog> {
        self.queue.pop_front()
    }

    /// Dialogs waiting, including the visible one
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Dialogs ever shown since startup
    pub fn shown_count(&self) -> usize {
        self.shown_count
    }
}
