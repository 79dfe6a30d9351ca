//! Languages and the translation store.
//!
//! The deck ships two bundles compiled into the binary. A settings file may
//! point at a directory with replacement `he.json` / `en.json` files; those
//! go through the same parse-and-validate path, so an incomplete bundle is
//! reported at startup rather than showing up as blank text on a slide.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

mod bundle;

pub use bundle::{
    Card, ChallengesText, CollaborationText, EngineText, IntroText, NavText, Phase, Stat,
    TechText, TranslationBundle, WorkflowsText, MAX_DEPARTMENTS, TREND_POINTS,
};

const BUILTIN_HE: &str = include_str!("../assets/i18n/he.json");
const BUILTIN_EN: &str = include_str!("../assets/i18n/en.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::He, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    /// The language's own name for itself, used on the toggle control.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::He => "עברית",
            Language::En => "English",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::He => Language::En,
            Language::En => Language::He,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::He)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("failed to read {language} bundle from {}", .path.display())]
    Read {
        language: Language,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{language} bundle is malformed")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
    #[error("{language} bundle is incomplete: {}", .fields.join(", "))]
    Incomplete {
        language: Language,
        fields: Vec<String>,
    },
}

/// One validated bundle per language.
#[derive(Debug, Clone)]
pub struct Translations {
    he: TranslationBundle,
    en: TranslationBundle,
}

impl Translations {
    /// Parses and validates the bundles embedded in the binary.
    pub fn builtin() -> Result<Self, BundleError> {
        Self::from_sources(BUILTIN_HE, BUILTIN_EN)
    }

    /// Parses and validates bundles from raw JSON text.
    pub fn from_sources(he: &str, en: &str) -> Result<Self, BundleError> {
        Ok(Self {
            he: parse_bundle(Language::He, he)?,
            en: parse_bundle(Language::En, en)?,
        })
    }

    /// Loads `he.json` and `en.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, BundleError> {
        let read = |language: Language| {
            let path = dir.join(format!("{}.json", language.code()));
            fs::read_to_string(&path).map_err(|source| BundleError::Read {
                language,
                path,
                source,
            })
        };
        let he = read(Language::He)?;
        let en = read(Language::En)?;
        Self::from_sources(&he, &en)
    }

    pub fn get(&self, language: Language) -> &TranslationBundle {
        match language {
            Language::He => &self.he,
            Language::En => &self.en,
        }
    }
}

fn parse_bundle(language: Language, raw: &str) -> Result<TranslationBundle, BundleError> {
    let bundle: TranslationBundle =
        serde_json::from_str(raw).map_err(|source| BundleError::Parse { language, source })?;
    let fields = bundle.missing_fields();
    if fields.is_empty() {
        Ok(bundle)
    } else {
        Err(BundleError::Incomplete { language, fields })
    }
}
