//! Trending search terms domain model.

use serde::{Deserialize, Serialize};

/// A search term counted by the remote trending store, together with a
/// representative movie for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    /// The exact search term as typed by users.
    pub term: String,

    /// How many times the term has been searched.
    pub count: u64,

    /// Catalog id of the representative movie (the top result when the
    /// term was last recorded).
    pub movie_id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub poster_url: Option<String>,
}
