//! Debounce Integration Tests
//!
//! Timing behavior of the search dispatcher under tokio's paused clock.

use std::sync::Arc;
use std::time::Duration;

use portalkit::search::{DispatchSettings, SearchDispatcher, SearchOutcome};
use portalkit::{ContentItem, Corpus};

fn corpus() -> Arc<Corpus> {
    let mut corpus = Corpus::new();
    corpus.add(ContentItem::new(
        "blog/o-que-e-scrum.html",
        "What is Scrum?",
        "Fundamentals of the agile methodology",
        "scrum",
    ));
    corpus.add(ContentItem::new(
        "pages/tasktracker.html",
        "TaskTracker",
        "Complete tool for Scrum project management",
        "tools",
    ));
    Arc::new(corpus)
}

#[tokio::test(start_paused = true)]
async fn test_supersession_at_100ms_of_300ms_window() {
    let settings = DispatchSettings {
        quiet_period: Duration::from_millis(300),
        ..Default::default()
    };
    let (dispatcher, mut outcomes) = SearchDispatcher::spawn(corpus(), settings);

    // t=0: first query; t=100ms: superseded before the window closes
    dispatcher.submit("tracker").await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    dispatcher.submit("scrum").await.unwrap();

    // Only the second query executes
    match outcomes.recv().await.unwrap() {
        SearchOutcome::Results { query, hits } => {
            assert_eq!(query, "scrum");
            assert_eq!(hits.len(), 2);
        }
        other => panic!("expected results, got {:?}", other),
    }

    // And nothing else was ever dispatched
    dispatcher.shutdown().await.unwrap();
    assert!(outcomes.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_query_after_window_closes_dispatches_both() {
    let settings = DispatchSettings {
        quiet_period: Duration::from_millis(300),
        ..Default::default()
    };
    let (dispatcher, mut outcomes) = SearchDispatcher::spawn(corpus(), settings);

    dispatcher.submit("tracker").await.unwrap();
    let first = outcomes.recv().await.unwrap();

    dispatcher.submit("scrum").await.unwrap();
    let second = outcomes.recv().await.unwrap();

    match (first, second) {
        (
            SearchOutcome::Results { query: q1, hits: h1 },
            SearchOutcome::Results { query: q2, .. },
        ) => {
            assert_eq!(q1, "tracker");
            assert_eq!(h1.len(), 1);
            assert_eq!(q2, "scrum");
        }
        other => panic!("expected two result sets, got {:?}", other),
    }

    dispatcher.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_rapid_keystrokes_coalesce_to_one_dispatch() {
    let settings = DispatchSettings {
        quiet_period: Duration::from_millis(300),
        ..Default::default()
    };
    let (dispatcher, mut outcomes) = SearchDispatcher::spawn(corpus(), settings);

    // Typing "scrum" one keystroke at a time, 50ms apart. "s" clears
    // (below the minimum), the rest supersede each other.
    for partial in ["s", "sc", "scr", "scru", "scrum"] {
        dispatcher.submit(partial).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    assert_eq!(outcomes.recv().await.unwrap(), SearchOutcome::Cleared);

    match outcomes.recv().await.unwrap() {
        SearchOutcome::Results { query, .. } => assert_eq!(query, "scrum"),
        other => panic!("expected results, got {:?}", other),
    }

    dispatcher.shutdown().await.unwrap();
    assert!(outcomes.recv().await.is_none());
}
