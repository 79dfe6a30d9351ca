use anyhow::Result;
use log::{debug, warn};

use super::{App, PresentationState};
use crate::config::{DeckSettings, MIN_TICK_MS};
use crate::definitions::HitRegions;
use crate::i18n::Translations;

impl App {
    /// Creates a new instance of the `App` state.
    ///
    /// The deck starts on the first slide in the configured default language.
    ///
    /// # Arguments
    ///
    /// * `settings` - Deck settings, already resolved against the deck root.
    /// * `translations` - Validated bundles for both languages.
    pub fn new(settings: DeckSettings, translations: Translations) -> Self {
        debug!(
            "Initializing deck: language={}, tick={}ms, transition={}ms",
            settings.default_language, settings.tick_rate_ms, settings.transition_ms
        );
        if settings.tick_rate_ms < MIN_TICK_MS {
            warn!(
                "tick_rate_ms = {} is too fast, using {MIN_TICK_MS}ms",
                settings.tick_rate_ms
            );
        }
        if crate::logging::level_name(&settings.log_level).is_none() {
            warn!("unknown log_level '{}', using info", settings.log_level);
        }
        Self {
            should_quit: false,
            presentation: PresentationState::new(settings.default_language),
            translations,
            icons: settings.icons,
            regions: HitRegions::default(),
            transition: None,
            marquee_offset: 0,
            tick_rate: settings.tick_rate(),
            settings,
        }
    }

    /// Loads the translations named by `settings` and builds the app.
    pub fn from_settings(settings: DeckSettings) -> Result<Self> {
        let translations = settings.load_translations()?;
        Ok(Self::new(settings, translations))
    }
}
