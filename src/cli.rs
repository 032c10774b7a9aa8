//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "moviedeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search movies from your terminal", long_about = None)]
pub struct Args {
    /// Movie to search for at startup (and after Ctrl+R)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Search endpoint; the term is appended as the `q` query parameter
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Disable button and result animations
    #[arg(long)]
    pub no_animation: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Layer command-line overrides on top of the loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(query) = &self.query {
            config.search.default_query = query.clone();
        }
        if let Some(url) = &self.api_url {
            config.search.api_url = url.clone();
        }
        if self.no_animation {
            config.animation.enabled = false;
        }
        config
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
