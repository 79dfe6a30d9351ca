//! The derived view description.
//!
//! `DeckView::derive` is a pure function of the presentation state and the
//! translations. It is recomputed on every frame and handed to the renderer,
//! which never looks at the raw state itself.

use crate::app::PresentationState;
use crate::definitions::{IconSet, SlideId};
use crate::direction::{ArrowGlyph, LayoutPolicy, Step, layout_policy};
use crate::i18n::{Language, NavText, TranslationBundle, Translations};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry<'a> {
    pub slide: SlideId,
    pub title: &'a str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub step: Step,
    pub glyph: ArrowGlyph,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct DeckView<'a> {
    pub language: Language,
    pub policy: LayoutPolicy,
    pub bundle: &'a TranslationBundle,
    pub slide: SlideId,
    pub sidebar: Vec<SidebarEntry<'a>>,
    /// Label of the language toggle: the name of the language it switches to.
    pub toggle_label: &'static str,
    /// The two step controls, in on-screen order from left to right.
    pub controls: [NavControl; 2],
}

impl<'a> DeckView<'a> {
    pub fn derive(
        state: &PresentationState,
        translations: &'a Translations,
        icons: IconSet,
    ) -> Self {
        let language = state.active_language();
        let policy = layout_policy(language);
        let bundle = translations.get(language);
        let slide = state.active_slide();

        let sidebar = SlideId::ALL
            .iter()
            .map(|&id| SidebarEntry {
                slide: id,
                title: slide_title(&bundle.nav, id),
                icon: id.icon(icons),
                active: id == slide,
            })
            .collect();

        let controls = policy.controls_visual_order().map(|step| NavControl {
            step,
            glyph: policy.glyph(step),
            enabled: match step {
                Step::Forward => slide.next().is_some(),
                Step::Backward => slide.previous().is_some(),
            },
        });

        Self {
            language,
            policy,
            bundle,
            slide,
            sidebar,
            toggle_label: language.other().native_name(),
            controls,
        }
    }

    pub fn control(&self, step: Step) -> NavControl {
        self.controls
            .iter()
            .copied()
            .find(|control| control.step == step)
            .unwrap_or(NavControl {
                step,
                glyph: self.policy.glyph(step),
                enabled: false,
            })
    }
}

pub fn slide_title(nav: &NavText, slide: SlideId) -> &str {
    match slide {
        SlideId::Intro => &nav.intro,
        SlideId::Engine => &nav.engine,
        SlideId::Collaboration => &nav.collaboration,
        SlideId::Challenges => &nav.challenges,
        SlideId::Tech => &nav.tech,
        SlideId::Workflows => &nav.workflows,
    }
}
