//! The active display language.
//!
//! The portal ships with Brazilian Portuguese as the primary locale and
//! English as the secondary one. The locale only affects which user-facing
//! message a component emits; matching and validation logic never depend
//! on it.

use serde::{Deserialize, Serialize};

/// Display language for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese (primary)
    #[serde(rename = "pt-BR")]
    PtBr,

    /// English (secondary)
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// BCP 47 language tag for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }

    /// Human-readable language name
    pub fn name(&self) -> &'static str {
        match self {
            Locale::PtBr => "Português",
            Locale::En => "English",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::PtBr
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "pt-br" | "pt" | "pt_br" => Ok(Locale::PtBr),
            "en" | "en-us" => Ok(Locale::En),
            _ => anyhow::bail!("Unknown locale: {}", s),
        }
    }
}
