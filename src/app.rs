//! Application state, input handling, and rendering

mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

pub use app_state::App;




#[cfg(test)]
#[path = "app/app_render_tests.rs"]
mod app_render_tests;
