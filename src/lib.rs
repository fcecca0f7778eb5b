//! portalkit - Interaction engine for a bilingual content portal
//!
//! The portal itself is static pages; everything interactive funnels
//! through three cooperating components:
//! - A preference store holding the visitor's display language
//! - A text filter/search engine over the content corpus
//! - A form validation engine with a pluggable submission transport
//!
//! All three return plain data (result lists, error lists, notifications);
//! rendering is the caller's job and nothing here touches a page.
//!
//! # Modules
//!
//! - `search`: corpus filtering, substring search, highlighting, debounce
//! - `forms`: field rules, validation, submission flow
//! - `transport`: abstract submission/share/clipboard collaborators
//! - `i18n`: locale-keyed message table (pt-BR / en)
//! - `prefs`: persisted locale preference
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search the corpus
//! portalkit search scrum
//!
//! # Filter by category
//! portalkit filter tools
//!
//! # Switch the display language
//! portalkit locale set en
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod forms;
pub mod i18n;
pub mod notify;
pub mod prefs;
pub mod search;
pub mod transport;

// Re-export main types at crate root for convenience
pub use domain::{ContentId, ContentItem, Locale};
pub use forms::{FieldKind, FieldRule, FormSchema, ValidationError};
pub use notify::{Notification, Severity};
pub use prefs::PreferenceStore;
pub use search::{Corpus, LoadMore, Pager, SearchDispatcher, SearchHit, SearchOutcome, SearchResult};
pub use transport::{MockTransport, SubmitOutcome, SubmitRequest, Transport};
