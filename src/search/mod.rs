//! Text filtering and search over the content corpus.
//!
//! The engine is a pure matcher: substring matching against title, body,
//! and tags, with results in corpus order. No ranking, no fuzziness. The
//! debounced dispatcher sits in front of it and coalesces keystrokes the
//! way the portal's search box does.

pub mod corpus;
pub mod dispatch;
pub mod highlight;
pub mod pager;

pub use corpus::{Corpus, SearchHit, SearchResult, ALL_CATEGORIES, DEFAULT_EXCERPT_CHARS};
pub use dispatch::{DispatchSettings, SearchDispatcher, SearchOutcome, MIN_QUERY_LEN, QUIET_PERIOD};
pub use highlight::{find_spans, highlight, MARK_CLOSE, MARK_OPEN};
pub use pager::{LoadMore, Pager, DEFAULT_PAGE_SIZE, LOAD_LATENCY};
