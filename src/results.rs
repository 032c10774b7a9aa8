//! Result list rendering
//!
//! One card per movie, stacked top to bottom, scrolled by whole cards.

pub mod results_render;
