//! Domain types for the portalkit interaction engine.
//!
//! This module contains the core data structures:
//! - ContentItem: a single piece of portal content (article, page, tool)
//! - ContentId: stable identifier derived from the content URL
//! - Locale: the active display language

pub mod content;
pub mod locale;

// Re-export commonly used types
pub use content::{ContentId, ContentItem};
pub use locale::Locale;
