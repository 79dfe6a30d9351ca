use std::time::Instant;

use log::debug;

use super::{App, SlideTransition};
use crate::definitions::SlideId;
use crate::direction::Step;
use crate::i18n::Language;

// The only mutation paths for the presentation state. Every change restarts
// the entry transition; a change that is a no-op leaves everything as is.
impl App {
    /// Jumps straight to `slide`. Always allowed.
    pub fn set_active_slide(&mut self, slide: SlideId) -> bool {
        let from = self.active_slide();
        if !self.presentation.set_active_slide(slide) {
            return false;
        }
        debug!("slide {} -> {}", from.key(), slide.key());
        self.start_transition();
        true
    }

    /// Switches the language, which also flips the layout direction.
    pub fn set_active_language(&mut self, language: Language) -> bool {
        if !self.presentation.set_active_language(language) {
            return false;
        }
        debug!(
            "language -> {} ({})",
            language,
            self.policy().direction.attribute()
        );
        self.start_transition();
        true
    }

    pub fn toggle_language(&mut self) -> bool {
        self.set_active_language(self.active_language().other())
    }

    /// Moves one slide along the fixed order. A no-op at either end.
    pub fn step(&mut self, step: Step) -> bool {
        let current = self.active_slide();
        let target = match step {
            Step::Forward => current.next(),
            Step::Backward => current.previous(),
        };
        match target {
            Some(slide) => self.set_active_slide(slide),
            None => {
                debug!("step {:?} ignored at {}", step, current.key());
                false
            }
        }
    }

    pub fn step_forward(&mut self) -> bool {
        self.step(Step::Forward)
    }

    pub fn step_backward(&mut self) -> bool {
        self.step(Step::Backward)
    }

    /// Whether a step in the given direction would change the slide.
    pub fn can_step(&self, step: Step) -> bool {
        match step {
            Step::Forward => self.active_slide().next().is_some(),
            Step::Backward => self.active_slide().previous().is_some(),
        }
    }

    fn start_transition(&mut self) {
        let duration = self.settings.transition();
        if duration.is_zero() {
            self.transition = None;
            return;
        }
        // A new change replaces whatever transition is still running.
        self.transition = Some(SlideTransition {
            started: Instant::now(),
            duration,
            from: self.policy().entry_edge,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckSettings;
    use crate::direction::layout_policy;
    use crate::i18n::Translations;

    fn app(language: Language) -> App {
        let settings = DeckSettings {
            default_language: language,
            ..DeckSettings::default()
        };
        App::new(settings, Translations::builtin().unwrap())
    }

    #[test]
    fn backward_from_first_is_a_no_op() {
        let mut app = app(Language::He);
        assert!(!app.can_step(Step::Backward));
        assert!(!app.step_backward());
        assert_eq!(app.active_slide(), SlideId::Intro);
        assert!(app.transition.is_none());
    }

    #[test]
    fn forward_from_last_is_a_no_op() {
        let mut app = app(Language::En);
        app.set_active_slide(SlideId::Workflows);
        assert!(!app.can_step(Step::Forward));
        assert!(!app.step_forward());
        assert_eq!(app.active_slide(), SlideId::Workflows);
    }

    #[test]
    fn jump_reaches_every_slide_from_every_slide() {
        let mut app = app(Language::He);
        for from in SlideId::ALL {
            for to in SlideId::ALL {
                app.set_active_slide(from);
                app.set_active_slide(to);
                assert_eq!(app.active_slide(), to);
            }
        }
    }

    #[test]
    fn steps_move_one_position() {
        let mut app = app(Language::En);
        app.set_active_slide(SlideId::Collaboration);
        assert!(app.step_forward());
        assert_eq!(app.active_slide(), SlideId::Challenges);
        assert!(app.step_backward());
        assert!(app.step_backward());
        assert_eq!(app.active_slide(), SlideId::Engine);
    }

    #[test]
    fn visual_forward_control_increments_index_in_both_languages() {
        for language in Language::ALL {
            let mut app = app(language);
            app.set_active_slide(SlideId::Challenges);
            let policy = layout_policy(language);
            let before = app.active_slide().index();
            app.step(policy.step_for_arrow(policy.forward_glyph));
            assert_eq!(app.active_slide().index(), before + 1);
            app.step(policy.step_for_arrow(policy.backward_glyph));
            assert_eq!(app.active_slide().index(), before);
        }
    }

    #[test]
    fn repeated_setters_change_nothing() {
        let mut app = app(Language::He);
        app.transition = None;
        assert!(!app.set_active_language(Language::He));
        assert!(!app.set_active_slide(SlideId::Intro));
        assert!(app.transition.is_none());
        assert_eq!(app.active_language(), Language::He);
        assert_eq!(app.active_slide(), SlideId::Intro);
    }

    #[test]
    fn language_toggle_keeps_the_slide() {
        let mut app = app(Language::He);
        app.set_active_slide(SlideId::Tech);
        assert!(app.toggle_language());
        assert_eq!(app.active_language(), Language::En);
        assert_eq!(app.active_slide(), SlideId::Tech);
        assert!(app.toggle_language());
        assert_eq!(app.active_language(), Language::He);
    }

    #[test]
    fn changes_start_a_transition_from_the_entry_edge() {
        let mut app = app(Language::He);
        app.step_forward();
        let transition = app.transition.expect("transition started");
        assert_eq!(transition.from, layout_policy(Language::He).entry_edge);
        app.toggle_language();
        let transition = app.transition.expect("transition restarted");
        assert_eq!(transition.from, layout_policy(Language::En).entry_edge);
    }

    #[test]
    fn zero_transition_setting_disables_animation() {
        let settings = DeckSettings {
            transition_ms: 0,
            ..DeckSettings::default()
        };
        let mut app = App::new(settings, Translations::builtin().unwrap());
        app.step_forward();
        assert!(app.transition.is_none());
    }
}
