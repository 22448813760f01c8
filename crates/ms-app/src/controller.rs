//! Debounced search controller.
//!
//! One task owns the whole search flow: raw input arrives over a channel,
//! a single pending deadline debounces it, and when the deadline elapses
//! un-superseded the raw value settles and a catalog fetch is spawned.
//! Fetches post back over an internal channel tagged with their
//! [`FetchTicket`]; the state machine discards anything stale. State
//! snapshots go out over a `watch` channel for the view to observe.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};

use ms_core::catalog::MovieSummary;
use ms_core::ports::CatalogError;
use ms_core::search::{FetchFailure, FetchTicket, SearchState};

use crate::usecases::{FetchMovies, RecordSearch};

struct FetchOutcome {
    ticket: FetchTicket,
    query: String,
    result: Result<Vec<MovieSummary>, CatalogError>,
}

/// Handle held by the caller: feeds raw input in, observes state snapshots.
///
/// Dropping every handle closes the input channel and stops the controller.
#[derive(Clone)]
pub struct SearchHandle {
    input_tx: mpsc::UnboundedSender<String>,
    state_rx: watch::Receiver<SearchState>,
}

impl SearchHandle {
    /// Buffer a raw query mutation. The fetch is only issued once input has
    /// been quiet for the debounce window.
    pub fn push_input(&self, raw: impl Into<String>) {
        // A send failure means the controller task is gone; nothing to do.
        let _ = self.input_tx.send(raw.into());
    }

    /// Current state snapshot.
    pub fn state(&self) -> SearchState {
        self.state_rx.borrow().clone()
    }

    /// Receiver for observing state changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_rx.clone()
    }
}

/// The search coordination task. Construct with [`SearchController::new`],
/// then drive it with `tokio::spawn(controller.run())`.
pub struct SearchController {
    fetch: FetchMovies,
    recorder: Option<Arc<RecordSearch>>,
    window: Duration,
    state_tx: watch::Sender<SearchState>,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl SearchController {
    /// `recorder` is the post-success trending write; pass `None` to
    /// disable trending writes entirely.
    pub fn new(
        fetch: FetchMovies,
        recorder: Option<Arc<RecordSearch>>,
        window: Duration,
    ) -> (Self, SearchHandle) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SearchState::default());
        let controller = Self {
            fetch,
            recorder,
            window,
            state_tx,
            input_rx,
        };
        let handle = SearchHandle { input_tx, state_rx };
        (controller, handle)
    }

    /// Run until every [`SearchHandle`] has been dropped.
    pub async fn run(self) {
        let SearchController {
            fetch,
            recorder,
            window,
            state_tx,
            mut input_rx,
        } = self;

        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<FetchOutcome>();

        let mut raw = String::new();
        let mut settled = String::new();
        let mut deadline: Option<Instant> = None;

        // The initial settled query is empty: fetch the default discover
        // listing right away, before any input arrives.
        issue_fetch(&fetch, &state_tx, &done_tx, settled.clone());

        loop {
            tokio::select! {
                input = input_rx.recv() => match input {
                    Some(value) => {
                        // Each mutation restarts the single pending timer.
                        raw = value;
                        deadline = Some(Instant::now() + window);
                    }
                    None => break,
                },
                _ = async { sleep_until(deadline.unwrap()).await }, if deadline.is_some() => {
                    deadline = None;
                    // Only a *changed* settled value triggers a fetch; typing
                    // away and back to the same query is not a new search.
                    if raw != settled {
                        settled = raw.clone();
                        issue_fetch(&fetch, &state_tx, &done_tx, settled.clone());
                    }
                }
                Some(outcome) = done_rx.recv() => {
                    resolve_fetch(&recorder, &state_tx, outcome);
                }
            }
        }
    }
}

fn issue_fetch(
    fetch: &FetchMovies,
    state_tx: &watch::Sender<SearchState>,
    done_tx: &mpsc::UnboundedSender<FetchOutcome>,
    query: String,
) {
    let mut ticket = FetchTicket(0);
    state_tx.send_modify(|state| ticket = state.begin_fetch());
    debug!("fetch #{} issued for {:?}", ticket.0, query);

    let fetch = fetch.clone();
    let done_tx = done_tx.clone();
    tokio::spawn(async move {
        let result = fetch.execute(&query).await;
        let _ = done_tx.send(FetchOutcome {
            ticket,
            query,
            result,
        });
    });
}

fn resolve_fetch(
    recorder: &Option<Arc<RecordSearch>>,
    state_tx: &watch::Sender<SearchState>,
    outcome: FetchOutcome,
) {
    let FetchOutcome {
        ticket,
        query,
        result,
    } = outcome;

    let mut first_hit = None;
    // Stale outcomes leave the state untouched, so subscribers must not
    // be woken for them either.
    let applied = state_tx.send_if_modified(|state| match result {
        Ok(movies) => {
            first_hit = movies.first().cloned();
            state.finish(ticket, Ok(movies))
        }
        Err(err) => {
            warn!("catalog fetch for {:?} failed: {}", query, err);
            state.finish(ticket, Err(to_failure(err)))
        }
    });

    if !applied {
        debug!("discarding stale fetch #{} for {:?}", ticket.0, query);
        return;
    }

    // Post-success step: count this search term, best effort. Only real
    // searches with at least one hit are counted.
    if query.is_empty() {
        return;
    }
    let (Some(recorder), Some(movie)) = (recorder.as_ref(), first_hit) else {
        return;
    };
    let recorder = Arc::clone(recorder);
    tokio::spawn(async move {
        if let Err(err) = recorder.execute(&query, &movie).await {
            warn!("failed to record trending search {:?}: {}", query, err);
        }
    });
}

fn to_failure(err: CatalogError) -> FetchFailure {
    match err {
        CatalogError::Rejected(message) => FetchFailure::Rejected(message),
        other => FetchFailure::Unavailable(format!("Error fetching movies: {}", other)),
    }
}
