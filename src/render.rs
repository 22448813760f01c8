//! Plain-text view rendering.
//!
//! Pure mappings from state snapshots to output lines; no I/O here.

use ms_core::catalog::MovieSummary;
use ms_core::search::{FetchPhase, SearchState};
use ms_core::trending::TrendingEntry;

/// Trending panel with 1-based rank labels. An empty list renders nothing,
/// matching the panel being hidden.
pub fn render_trending(entries: &[TrendingEntry]) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Trending Movies".to_string()];
    for (index, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({} searches)",
            index + 1,
            entry.title,
            entry.count
        ));
    }
    lines
}

/// The movie list section for the current search state.
pub fn render_search(state: &SearchState) -> Vec<String> {
    match state.phase() {
        FetchPhase::Idle => Vec::new(),
        FetchPhase::Loading => vec!["Loading movies...".to_string()],
        FetchPhase::Failed => vec![state
            .error()
            .unwrap_or("Something went wrong.")
            .to_string()],
        FetchPhase::Loaded => {
            let mut lines = vec!["All Movies".to_string()];
            if state.movies().is_empty() {
                lines.push("No movies found.".to_string());
            }
            for movie in state.movies() {
                lines.push(movie_line(movie));
            }
            lines
        }
    }
}

/// One movie as a display line: title, rating, language, year.
pub fn movie_line(movie: &MovieSummary) -> String {
    let rating = if movie.vote_average > 0.0 {
        format!("{:.1}", movie.vote_average)
    } else {
        "N/A".to_string()
    };
    format!(
        "{} | {} | {} | {}",
        movie.title,
        rating,
        movie.original_language.as_deref().unwrap_or("n/a"),
        movie.release_year().unwrap_or("n/a"),
    )
}
