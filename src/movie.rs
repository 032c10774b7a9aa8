//! Movie records and search payload parsing
//!
//! The search API is treated as untrusted input: the payload shape is checked
//! before use and anything unexpected degrades to "no movies" instead of an error.

use serde_json::{Map, Value};

use crate::search::SearchError;

/// Field holding the ordered list of movie records
const RESULTS_FIELD: &str = "description";

const ID_FIELD: &str = "id";
const TITLE_FIELD: &str = "#TITLE";
const YEAR_FIELD: &str = "#YEAR";
const RANK_FIELD: &str = "#RANK";
const ACTORS_FIELD: &str = "#ACTORS";
const POSTER_FIELD: &str = "#IMG_POSTER";

/// A single movie returned by the search API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub id: Option<String>,
    pub title: String,
    pub year: Option<String>,
    pub rank: Option<String>,
    pub actors: Option<String>,
    pub poster_url: Option<String>,
}

impl Movie {
    /// Build a movie from one entry of the results array
    ///
    /// Returns None when the entry is not a JSON object. Scalar fields may be
    /// strings or numbers; anything else is treated as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;

        Some(Self {
            id: text_field(fields, ID_FIELD),
            title: text_field(fields, TITLE_FIELD).unwrap_or_default(),
            year: text_field(fields, YEAR_FIELD),
            rank: text_field(fields, RANK_FIELD),
            actors: text_field(fields, ACTORS_FIELD),
            poster_url: text_field(fields, POSTER_FIELD),
        })
    }

    /// Stable key for this card: the record id, or its position when absent
    pub fn key(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| index.to_string())
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a raw response body into an ordered list of movies
///
/// A body that is not a JSON object is malformed. An absent, null, or
/// non-array results field yields an empty list.
pub fn parse_search_body(body: &str) -> Result<Vec<Movie>, SearchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SearchError::Malformed(e.to_string()))?;

    match value {
        Value::Object(root) => Ok(movies_from_payload(&root)),
        other => Err(SearchError::Malformed(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn movies_from_payload(root: &Map<String, Value>) -> Vec<Movie> {
    match root.get(RESULTS_FIELD) {
        Some(Value::Array(items)) => {
            let movies: Vec<Movie> = items.iter().filter_map(Movie::from_value).collect();
            if movies.len() != items.len() {
                log::warn!(
                    "Skipped {} non-object entries in search results",
                    items.len() - movies.len()
                );
            }
            movies
        }
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            log::warn!(
                "Search results field has unexpected type {}",
                json_type_name(other)
            );
            Vec::new()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "movie_tests.rs"]
mod movie_tests;
