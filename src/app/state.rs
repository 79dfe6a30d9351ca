//! Core state structures for the deck.
//!
//! `App` owns the whole runtime state: the two-field presentation state, the
//! validated translations, the settings and the per-frame hit regions. The
//! renderer reads it and the input handlers mutate it through the
//! navigation methods only.

use std::time::{Duration, Instant};

use crate::config::DeckSettings;
use crate::definitions::{HitRegions, IconSet, SlideId};
use crate::direction::{Edge, LayoutPolicy, layout_policy};
use crate::i18n::{Language, TranslationBundle, Translations};

/// Which slide is shown and in which language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationState {
    active_slide: SlideId,
    active_language: Language,
}

impl PresentationState {
    pub fn new(language: Language) -> Self {
        Self {
            active_slide: SlideId::first(),
            active_language: language,
        }
    }

    pub fn active_slide(&self) -> SlideId {
        self.active_slide
    }

    pub fn active_language(&self) -> Language {
        self.active_language
    }

    /// Returns `true` when the slide actually changed.
    pub fn set_active_slide(&mut self, slide: SlideId) -> bool {
        if self.active_slide == slide {
            return false;
        }
        self.active_slide = slide;
        true
    }

    /// Returns `true` when the language actually changed.
    pub fn set_active_language(&mut self, language: Language) -> bool {
        if self.active_language == language {
            return false;
        }
        self.active_language = language;
        true
    }
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// A cosmetic entry animation for the content area.
#[derive(Debug, Clone, Copy)]
pub struct SlideTransition {
    pub started: Instant,
    pub duration: Duration,
    pub from: Edge,
}

impl SlideTransition {
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Columns the content is still pushed in from `from`.
    pub fn inset(&self, now: Instant, max: u16) -> u16 {
        let remaining = 1.0 - self.progress(now);
        (f64::from(max) * remaining).round() as u16
    }
}

/// The main application state.
pub struct App {
    /// Flag to indicate if the application should quit.
    pub should_quit: bool,
    pub(crate) presentation: PresentationState,
    pub(crate) translations: Translations,
    pub settings: DeckSettings,
    pub icons: IconSet,
    /// Screen regions recorded by the last render, for mouse hit testing.
    pub regions: HitRegions,
    /// The in-flight entry animation, if any.
    pub transition: Option<SlideTransition>,
    /// Scroll position of the marquee and bridge particles, in columns.
    pub marquee_offset: usize,
    /// The configured tick rate for the application.
    pub(crate) tick_rate: Duration,
}

impl App {
    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    pub fn active_slide(&self) -> SlideId {
        self.presentation.active_slide()
    }

    pub fn active_language(&self) -> Language {
        self.presentation.active_language()
    }

    /// The bundle for the active language.
    pub fn bundle(&self) -> &TranslationBundle {
        self.translations.get(self.active_language())
    }

    pub fn policy(&self) -> LayoutPolicy {
        layout_policy(self.active_language())
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_first_slide() {
        let state = PresentationState::new(Language::He);
        assert_eq!(state.active_slide(), SlideId::Intro);
        assert_eq!(state.active_language(), Language::He);
    }

    #[test]
    fn setters_report_changes_only() {
        let mut state = PresentationState::default();
        assert!(!state.set_active_slide(SlideId::Intro));
        assert!(state.set_active_slide(SlideId::Tech));
        assert!(!state.set_active_slide(SlideId::Tech));
        assert!(!state.set_active_language(Language::He));
        assert!(state.set_active_language(Language::En));
        assert_eq!(state.active_slide(), SlideId::Tech);
    }

    #[test]
    fn transition_shrinks_to_zero() {
        let start = Instant::now();
        let transition = SlideTransition {
            started: start,
            duration: Duration::from_millis(400),
            from: Edge::Left,
        };
        assert_eq!(transition.inset(start, 8), 8);
        assert_eq!(transition.inset(start + Duration::from_millis(200), 8), 4);
        assert_eq!(transition.inset(start + Duration::from_millis(500), 8), 0);
        assert!(transition.is_finished(start + Duration::from_millis(400)));
    }

    #[test]
    fn zero_length_transition_is_already_done() {
        let start = Instant::now();
        let transition = SlideTransition {
            started: start,
            duration: Duration::ZERO,
            from: Edge::Right,
        };
        assert!(transition.is_finished(start));
        assert_eq!(transition.inset(start, 8), 0);
    }
}
