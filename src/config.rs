//! Configuration for portalkit paths and search behavior.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (PORTALKIT_HOME, PORTALKIT_CORPUS)
//! 2. Config file (.portalkit/config.yaml)
//! 3. Defaults (~/.portalkit)
//!
//! Config file discovery:
//! - Searches current directory and parents for .portalkit/config.yaml
//! - Paths in config file are relative to the config file's parent directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<std::result::Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub search: Option<SearchConfig>,
    #[serde(default)]
    pub locale: Option<LocaleConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to config file)
    pub home: Option<String>,
    /// Corpus JSON file (relative to config file's parent)
    pub corpus: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: Option<u64>,
    pub min_query_len: Option<usize>,
    pub excerpt_chars: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    pub default: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to portalkit home (preferences and default corpus)
    pub home: PathBuf,
    /// Absolute path to the corpus file
    pub corpus: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Search tunables
    pub search: SearchSettings,
    /// Locale used when no preference has been stored
    pub default_locale: crate::domain::Locale,
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub excerpt_chars: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
            excerpt_chars: 150,
        }
    }
}

impl SearchSettings {
    /// Convert into the dispatcher's settings
    pub fn dispatch_settings(&self) -> crate::search::DispatchSettings {
        crate::search::DispatchSettings {
            quiet_period: Duration::from_millis(self.debounce_ms),
            min_query_len: self.min_query_len,
            excerpt_chars: self.excerpt_chars,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".portalkit").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    // Default home directory
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".portalkit");

    // Check for config file
    let config_file = find_config_file();

    let (home, corpus, search, default_locale) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .portalkit/ (i.e., grandparent of config.yaml)
        let base_dir = config_path
            .parent() // .portalkit/
            .and_then(|p| p.parent()) // project root
            .unwrap_or(Path::new("."));

        // Resolve home path
        let home = if let Ok(env_home) = std::env::var("PORTALKIT_HOME") {
            PathBuf::from(env_home)
        } else if let Some(ref home_path) = config.paths.home {
            // home is relative to the .portalkit/ directory
            let portalkit_dir = config_path.parent().unwrap_or(Path::new("."));
            resolve_path(portalkit_dir, home_path)
        } else {
            default_home.clone()
        };

        // Resolve corpus path
        let corpus = if let Ok(env_corpus) = std::env::var("PORTALKIT_CORPUS") {
            PathBuf::from(env_corpus)
        } else if let Some(ref corpus_path) = config.paths.corpus {
            resolve_path(base_dir, corpus_path)
        } else {
            home.join("corpus.json")
        };

        // Search tunables
        let defaults = SearchSettings::default();
        let search = SearchSettings {
            debounce_ms: config
                .search
                .as_ref()
                .and_then(|s| s.debounce_ms)
                .unwrap_or(defaults.debounce_ms),
            min_query_len: config
                .search
                .as_ref()
                .and_then(|s| s.min_query_len)
                .unwrap_or(defaults.min_query_len),
            excerpt_chars: config
                .search
                .as_ref()
                .and_then(|s| s.excerpt_chars)
                .unwrap_or(defaults.excerpt_chars),
        };

        // Default locale
        let default_locale = match config.locale.as_ref().and_then(|l| l.default.as_deref()) {
            Some(code) => code
                .parse()
                .with_context(|| format!("Invalid default locale in config: {}", code))?,
            None => crate::domain::Locale::default(),
        };

        (home, corpus, search, default_locale)
    } else {
        // No config file - use env vars or defaults
        let home = std::env::var("PORTALKIT_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_home.clone());

        let corpus = std::env::var("PORTALKIT_CORPUS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join("corpus.json"));

        (
            home,
            corpus,
            SearchSettings::default(),
            crate::domain::Locale::default(),
        )
    };

    Ok(ResolvedConfig {
        home,
        corpus,
        config_file,
        search,
        default_locale,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Get the portalkit home directory
pub fn portalkit_home() -> Result<PathBuf> {
    Ok(config()?.home.clone())
}

/// Get the corpus path
pub fn corpus_path() -> Result<PathBuf> {
    Ok(config()?.corpus.clone())
}

/// Get the preference file path ($PORTALKIT_HOME/prefs.json)
pub fn prefs_path() -> Result<PathBuf> {
    Ok(config()?.home.join("prefs.json"))
}
