// Configuration type definitions

use serde::Deserialize;

use crate::search::DEFAULT_QUERY;
use crate::search::client::DEFAULT_API_URL;

const DEFAULT_STAGGER_MS: u64 = 100;

/// Search section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Query searched at startup and restored by reset
    pub default_query: String,
    /// Search endpoint; the term is sent as `?q=`
    pub api_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_query: DEFAULT_QUERY.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Animation section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    /// Delay between consecutive result cards
    pub stagger_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            enabled: true,
            stagger_ms: DEFAULT_STAGGER_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}
