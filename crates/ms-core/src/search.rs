//! Fetch coordination state machine.
//!
//! One [`SearchState`] value is the single source of truth for what the view
//! shows: the current movie list, an optional error message, and whether a
//! fetch is in flight. Every fetch is tagged with a [`FetchTicket`] drawn
//! from a monotonically increasing sequence; a response whose ticket is not
//! the latest issued is discarded, so a superseded request can never
//! overwrite the result of a newer one.

use crate::catalog::MovieSummary;

/// Ticket identifying one issued fetch. Only the most recently issued
/// ticket is allowed to resolve the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(pub u64);

/// Coarse view of the state, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has ever been issued.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Loaded,
    /// The latest fetch failed.
    Failed,
}

/// How a fetch failed. The two cases differ in what happens to the movie
/// list already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The catalog definitively rejected the query; the prior list no
    /// longer applies and is cleared.
    Rejected(String),
    /// The fetch could not complete (transport failure, bad status). The
    /// prior list stays visible under the error message.
    Unavailable(String),
}

impl FetchFailure {
    pub fn message(&self) -> &str {
        match self {
            FetchFailure::Rejected(msg) | FetchFailure::Unavailable(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    movies: Vec<MovieSummary>,
    error: Option<String>,
    loading: bool,
    /// Sequence number of the most recently issued fetch; 0 = none yet.
    issued: u64,
}

impl SearchState {
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if self.issued == 0 {
            FetchPhase::Idle
        } else {
            FetchPhase::Loaded
        }
    }

    /// Start a new fetch: clears the previous error but keeps the previous
    /// movie list visible while loading (the list is only replaced when a
    /// response lands).
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.issued)
    }

    /// Resolve a fetch. Returns `false` (and leaves the state untouched)
    /// when `ticket` is stale, i.e. a newer fetch has been issued since.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<MovieSummary>, FetchFailure>,
    ) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.loading = false;
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.error = None;
            }
            Err(FetchFailure::Rejected(message)) => {
                self.error = Some(message);
                self.movies.clear();
            }
            Err(FetchFailure::Unavailable(message)) => {
                self.error = Some(message);
            }
        }
        true
    }
}
