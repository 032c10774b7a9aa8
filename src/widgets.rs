//! Layout helpers shared by renderers

pub mod popup;
