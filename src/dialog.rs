//! Modal dialog module
//!
//! Blocking error dialogs. While one is visible it takes all input until the
//! user dismisses it; further dialogs queue behind it.

mod dialog_render;
mod dialog_state;

pub use dialog_render::render_dialog;
pub use dialog_state::{DIALOG_TITLE, Dialog, DialogIcon, DialogState};
