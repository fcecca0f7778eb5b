//! Load-more pagination over the corpus listing.
//!
//! The portal's archive shows a batch of items and a load-more control.
//! Each request simulates backend latency, then yields the next batch,
//! most recent first. When the archive runs out the caller gets an info
//! notification and hides the control.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ContentItem, Locale};
use crate::i18n::{self, MessageKey};
use crate::notify::Notification;

use super::corpus::Corpus;

/// Simulated load latency, matching the portal's archive page
pub const LOAD_LATENCY: Duration = Duration::from_millis(1500);

/// Default batch size for the archive listing
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// What one load-more request produced
#[derive(Debug, Clone)]
pub enum LoadMore {
    /// Next batch of items, most recent first
    Page(Vec<ContentItem>),

    /// Archive exhausted; the load-more control should disappear
    Exhausted(Notification),
}

/// Stateful load-more cursor over [`Corpus::list`]
pub struct Pager {
    corpus: Arc<Corpus>,
    page_size: usize,
    latency: Duration,
    offset: usize,
}

impl Pager {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            page_size: DEFAULT_PAGE_SIZE,
            latency: LOAD_LATENCY,
            offset: 0,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Items not yet handed out
    pub fn remaining(&self) -> usize {
        self.corpus.len().saturating_sub(self.offset)
    }

    /// Label for the control while a request is in flight
    pub fn loading_label(locale: Locale) -> &'static str {
        i18n::message(MessageKey::LoadingMore, locale)
    }

    /// Wait out the simulated latency, then yield the next batch
    pub async fn load_more(&mut self, locale: Locale) -> LoadMore {
        tokio::time::sleep(self.latency).await;

        let all = self.corpus.list(None);
        if self.offset >= all.len() {
            return LoadMore::Exhausted(Notification::info(i18n::message(
                MessageKey::AllLoaded,
                locale,
            )));
        }

        let end = (self.offset + self.page_size).min(all.len());
        let items = all[self.offset..end].iter().map(|item| (*item).clone()).collect();
        self.offset = end;

        LoadMore::Page(items)
    }
}
