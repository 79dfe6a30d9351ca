use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::definitions::IconSet;
use crate::i18n::{Language, Translations};

/// Location of the settings file relative to the deck root.
pub const SETTINGS_PATH: &str = "config/folio.toml";

/// Faster ticks than this are clamped.
pub const MIN_TICK_MS: u64 = 10;

/// Deck settings, usually loaded from `config/folio.toml`.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckSettings {
    /// Language shown at startup.
    pub default_language: Language,
    /// Interval between animation ticks, in milliseconds.
    pub tick_rate_ms: u64,
    /// Length of the slide entry transition, in milliseconds. Zero disables it.
    pub transition_ms: u64,
    /// Columns the marquee scrolls per tick.
    pub marquee_step: usize,
    pub icons: IconSet,
    /// Directory with `he.json` / `en.json` replacing the built-in bundles.
    /// Relative paths are resolved against the deck root.
    pub translations_dir: Option<PathBuf>,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            default_language: Language::He,
            tick_rate_ms: 100,
            transition_ms: 400,
            marquee_step: 1,
            icons: IconSet::Unicode,
            translations_dir: None,
            log_level: String::from("info"),
            log_file: PathBuf::from("logs/folio.log"),
        }
    }
}

impl DeckSettings {
    /// Reads the settings under `root`. A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(SETTINGS_PATH);
        if !config_path.exists() {
            return Ok(Self::default().normalize(root));
        }
        let raw = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read settings: {}", config_path.display()))?;
        let parsed: DeckSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings: {}", config_path.display()))?;
        Ok(parsed.normalize(root))
    }

    /// Resolves relative paths against the deck root.
    fn normalize(mut self, root: &Path) -> Self {
        if self.log_file.is_relative() {
            self.log_file = root.join(&self.log_file);
        }
        if let Some(dir) = self.translations_dir.take() {
            self.translations_dir = Some(if dir.is_relative() { root.join(dir) } else { dir });
        }
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_MS))
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Loads the translation bundles these settings point at.
    pub fn load_translations(&self) -> Result<Translations> {
        match &self.translations_dir {
            Some(dir) => Translations::load_dir(dir)
                .with_context(|| format!("invalid translations in {}", dir.display())),
            None => Translations::builtin().context("built-in translations are invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(root: &Path, body: &str) {
        fs::create_dir_all(root.join("config")).unwrap();
        fs::write(root.join(SETTINGS_PATH), body).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DeckSettings::load(dir.path()).unwrap();
        assert_eq!(settings.default_language, Language::He);
        assert_eq!(settings.tick_rate(), Duration::from_millis(100));
        assert_eq!(settings.log_file, dir.path().join("logs/folio.log"));
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(
            dir.path(),
            "default_language = \"en\"\nicons = \"nerd\"\ntransition_ms = 0\n",
        );
        let settings = DeckSettings::load(dir.path()).unwrap();
        assert_eq!(settings.default_language, Language::En);
        assert_eq!(settings.icons, IconSet::NerdFont);
        assert_eq!(settings.transition(), Duration::ZERO);
        assert_eq!(settings.marquee_step, 1);
    }

    #[test]
    fn unknown_language_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), "default_language = \"fr\"\n");
        let err = DeckSettings::load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse settings"));
    }

    #[test]
    fn translations_dir_is_resolved_against_root() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), "translations_dir = \"i18n\"\n");
        let settings = DeckSettings::load(dir.path()).unwrap();
        assert_eq!(settings.translations_dir, Some(dir.path().join("i18n")));
        assert!(settings.load_translations().is_err());
    }

    #[test]
    fn default_settings_load_builtin_translations() {
        let translations = DeckSettings::default().load_translations().unwrap();
        assert!(!translations.get(Language::En).nav.name.is_empty());
    }
}
