use ratatui::layout::Rect;

/// Mouse-addressable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    QueryInput,
    SearchButton,
    Results,
    Dialog,
}

/// Where each component was drawn on the last frame
///
/// Rebuilt on every render; `None` means the component was not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub query_input: Option<Rect>,
    /// Full slot the button may grow into, not its current scaled size
    pub search_button: Option<Rect>,
    pub results: Option<Rect>,
    pub dialog: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
