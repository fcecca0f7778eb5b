//! Content sharing with clipboard fallback.
//!
//! The portal offers a share button on every article: the native share
//! sheet when the platform has one, otherwise copying the link to the
//! clipboard. Both are external collaborators; the flow here only picks
//! one, runs it, and turns the result into a user-facing notification.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Locale;
use crate::i18n::{self, MessageKey};
use crate::notify::Notification;

/// Native share sheet (or any equivalent peer-to-peer share service)
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, url: &str, title: &str) -> Result<()>;
}

/// Clipboard write access
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn copy(&self, text: &str) -> Result<()>;
}

/// Share a content link, preferring the native target and falling back
/// to the clipboard. Always resolves to a notification; failures surface
/// to the user, never as an error the caller must handle.
pub async fn share_content(
    target: Option<&dyn ShareTarget>,
    clipboard: &dyn Clipboard,
    url: &str,
    title: &str,
    locale: Locale,
) -> Notification {
    if let Some(target) = target {
        match target.share(url, title).await {
            Ok(()) => {
                return Notification::success(i18n::message(MessageKey::LinkShared, locale));
            }
            Err(e) => {
                tracing::debug!("Native share failed, falling back to clipboard: {}", e);
            }
        }
    }

    match clipboard.copy(url).await {
        Ok(()) => Notification::success(i18n::message(MessageKey::LinkCopied, locale)),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {}", e);
            Notification::error(i18n::message(MessageKey::ShareFailed, locale))
        }
    }
}
