//! Persisted locale preference.
//!
//! A single key-value pair, durable across sessions: the visitor's
//! display language. Reads never fail: an absent or malformed file
//! falls back to the default locale. Writes persist immediately.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::Locale;

/// On-disk shape of the preference file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefsFile {
    locale: Locale,
}

/// File-backed store for the locale preference
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured prefs path (`$PORTALKIT_HOME/prefs.json`)
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(crate::config::prefs_path()?))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the active locale.
    ///
    /// An absent file is a fresh visitor; a malformed one is logged and
    /// ignored. Both resolve to the default locale.
    pub async fn get(&self) -> Locale {
        self.get_or(Locale::default()).await
    }

    /// Read the active locale, resolving absent or malformed files to the
    /// given fallback (typically the configured default locale)
    pub async fn get_or(&self, fallback: Locale) -> Locale {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(_) => return fallback,
        };

        match serde_json::from_str::<PrefsFile>(&content) {
            Ok(prefs) => prefs.locale,
            Err(e) => {
                tracing::warn!(
                    "Malformed preference file {}, using fallback locale: {}",
                    self.path.display(),
                    e
                );
                fallback
            }
        }
    }

    /// Persist a locale choice immediately
    pub async fn set(&self, locale: Locale) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&PrefsFile { locale })?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write preferences: {}", self.path.display()))?;

        Ok(())
    }
}
