//! moviedeck: search a movie database from the terminal

pub mod animation;
pub mod app;
pub mod cli;
pub mod config;
pub mod dialog;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod movie;
pub mod results;
pub mod search;
pub mod widgets;

#[cfg(test)]
mod test_utils;
