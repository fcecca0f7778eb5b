//! Debounced search dispatch.
//!
//! The portal search box fires on every keystroke. The dispatcher sits
//! between the input stream and the engine: it holds each query for a
//! quiet period, drops queries that are superseded before the period
//! elapses, and short-circuits queries below the minimum length. A
//! superseded query never executes, so no stale results are delivered.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::corpus::{Corpus, SearchHit, DEFAULT_EXCERPT_CHARS};

/// Minimum normalized query length before a search dispatches
pub const MIN_QUERY_LEN: usize = 2;

/// Quiet period between the last keystroke and the dispatch
pub const QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Tunables for the dispatcher
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// How long the input must stay quiet before a query runs
    pub quiet_period: Duration,

    /// Queries shorter than this (after trimming) clear the panel instead
    pub min_query_len: usize,

    /// Excerpt budget passed through to the engine
    pub excerpt_chars: usize,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            quiet_period: QUIET_PERIOD,
            min_query_len: MIN_QUERY_LEN,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

/// Outcome of one dispatched interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was empty or too short; the results panel should be hidden.
    /// Emitted immediately, without waiting out the quiet period.
    Cleared,

    /// Query ran. An empty hit list is a real answer and the caller must
    /// render an explicit no-results state, not hide the panel.
    Results {
        query: String,
        hits: Vec<SearchHit>,
    },
}

/// Debounced front-end for [`Corpus::search`]
pub struct SearchDispatcher {
    query_tx: mpsc::Sender<String>,
    task: JoinHandle<()>,
}

impl SearchDispatcher {
    /// Spawn the dispatch task. Queries go in through [`Self::submit`];
    /// outcomes come out of the returned receiver.
    pub fn spawn(
        corpus: Arc<Corpus>,
        settings: DispatchSettings,
    ) -> (Self, mpsc::Receiver<SearchOutcome>) {
        let (query_tx, query_rx) = mpsc::channel(32);
        let (outcome_tx, outcome_rx) = mpsc::channel(32);

        let task = tokio::spawn(run_dispatch(corpus, settings, query_rx, outcome_tx));

        (Self { query_tx, task }, outcome_rx)
    }

    /// Feed one raw query string (typically the full input box content)
    pub async fn submit(&self, query: impl Into<String>) -> anyhow::Result<()> {
        self.query_tx
            .send(query.into())
            .await
            .map_err(|_| anyhow::anyhow!("Search dispatcher has shut down"))
    }

    /// Close the input side and wait for the task to finish
    pub async fn shutdown(self) -> anyhow::Result<()> {
        drop(self.query_tx);
        self.task.await?;
        Ok(())
    }
}

async fn run_dispatch(
    corpus: Arc<Corpus>,
    settings: DispatchSettings,
    mut query_rx: mpsc::Receiver<String>,
    outcome_tx: mpsc::Sender<SearchOutcome>,
) {
    // The query currently waiting out its quiet period, if any
    let mut pending: Option<String> = None;

    loop {
        match pending.take() {
            Some(query) => {
                tokio::select! {
                    next = query_rx.recv() => match next {
                        Some(next) => {
                            tracing::debug!(stale = %query, "Pending search superseded");
                            pending = accept(next, &settings, &outcome_tx).await;
                        }
                        // Input closed with a query still pending: drop it,
                        // nothing may observe a cancelled dispatch.
                        None => break,
                    },
                    _ = tokio::time::sleep(settings.quiet_period) => {
                        let hits: Vec<SearchHit> = corpus
                            .search_with(&query, settings.excerpt_chars)
                            .iter()
                            .map(|r| r.to_hit())
                            .collect();

                        tracing::debug!(query = %query, hits = hits.len(), "Search dispatched");

                        let outcome = SearchOutcome::Results {
                            query: query.trim().to_string(),
                            hits,
                        };
                        if outcome_tx.send(outcome).await.is_err() {
                            break;
                        }
                    }
                }
            }
            None => match query_rx.recv().await {
                Some(next) => pending = accept(next, &settings, &outcome_tx).await,
                None => break,
            },
        }
    }
}

/// Classify an incoming query: too short clears the panel immediately,
/// anything else becomes the new pending query.
async fn accept(
    query: String,
    settings: &DispatchSettings,
    outcome_tx: &mpsc::Sender<SearchOutcome>,
) -> Option<String> {
    if query.trim().chars().count() < settings.min_query_len {
        let _ = outcome_tx.send(SearchOutcome::Cleared).await;
        None
    } else {
        Some(query)
    }
}
