//! The six slide renderers.
//!
//! Each renderer is a pure function of the bundle and the layout policy; the
//! only extra input is the marquee offset, which is cosmetic.

use ratatui::layout::Rect;
use ratatui::prelude::*;

use super::widgets::{heading, split_edge};
use crate::definitions::{IconSet, SlideId};
use crate::direction::LayoutPolicy;
use crate::i18n::TranslationBundle;

mod challenges;
mod collaboration;
mod engine;
mod intro;
mod tech;
mod workflows;

pub use challenges::{SYSTEMS, marquee_window};
pub use engine::ring_offsets;
pub use tech::TREND;

/// Rows kept free at the bottom for the step controls.
const CONTROLS_ROWS: u16 = 3;

pub struct SlideContext<'a> {
    pub bundle: &'a TranslationBundle,
    pub policy: LayoutPolicy,
    pub icons: IconSet,
    pub marquee_offset: usize,
    /// Columns on the controls edge kept clear for the language toggle.
    pub toggle_reserve: u16,
}

pub fn render_slide(f: &mut Frame<'_>, ctx: &SlideContext<'_>, slide: SlideId, area: Rect) {
    let area = Rect {
        height: area.height.saturating_sub(CONTROLS_ROWS),
        ..area
    };
    if area.height < 4 || area.width < 10 {
        return;
    }
    let (_, top) = split_edge(
        Rect { height: 4, ..area },
        ctx.policy.controls_edge,
        ctx.toggle_reserve,
    );

    let body = match heading_for(ctx.bundle, slide) {
        Some((title, subtitle)) => {
            let used = heading(f, top, title, subtitle, ctx.policy.direction) + 1;
            Rect {
                y: area.y + used,
                height: area.height.saturating_sub(used),
                ..area
            }
        }
        None => area,
    };

    match slide {
        SlideId::Intro => intro::render(f, ctx, body),
        SlideId::Engine => engine::render(f, ctx, body),
        SlideId::Collaboration => collaboration::render(f, ctx, body),
        SlideId::Challenges => challenges::render(f, ctx, body),
        SlideId::Tech => tech::render(f, ctx, body),
        SlideId::Workflows => workflows::render(f, ctx, body),
    }
}

/// Title and subtitle for slides that use the shared heading.
fn heading_for(bundle: &TranslationBundle, slide: SlideId) -> Option<(&str, &str)> {
    let (title, subtitle) = match slide {
        SlideId::Intro => return None,
        SlideId::Engine => (&bundle.engine.title, &bundle.engine.subtitle),
        SlideId::Collaboration => (&bundle.collaboration.title, &bundle.collaboration.subtitle),
        SlideId::Challenges => (&bundle.challenges.title, &bundle.challenges.subtitle),
        SlideId::Tech => (&bundle.tech.title, &bundle.tech.subtitle),
        SlideId::Workflows => (&bundle.workflows.title, &bundle.workflows.subtitle),
    };
    Some((title.as_str(), subtitle.as_str()))
}
