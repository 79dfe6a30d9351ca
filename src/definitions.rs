use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// The six slides of the deck, declared in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlideId {
    Intro,
    Engine,
    Collaboration,
    Challenges,
    Tech,
    Workflows,
}

impl SlideId {
    /// Every slide in navigation order.
    pub const ALL: [SlideId; 6] = [
        SlideId::Intro,
        SlideId::Engine,
        SlideId::Collaboration,
        SlideId::Challenges,
        SlideId::Tech,
        SlideId::Workflows,
    ];

    pub fn first() -> Self {
        Self::ALL[0]
    }

    pub fn last() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }

    /// Position of the slide within [`SlideId::ALL`].
    pub fn index(self) -> usize {
        match self {
            SlideId::Intro => 0,
            SlideId::Engine => 1,
            SlideId::Collaboration => 2,
            SlideId::Challenges => 3,
            SlideId::Tech => 4,
            SlideId::Workflows => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following slide, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding slide, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn key(self) -> &'static str {
        match self {
            SlideId::Intro => "intro",
            SlideId::Engine => "engine",
            SlideId::Collaboration => "collaboration",
            SlideId::Challenges => "challenges",
            SlideId::Tech => "tech",
            SlideId::Workflows => "workflows",
        }
    }

    pub fn icon(self, icons: IconSet) -> &'static str {
        match (icons, self) {
            (IconSet::Unicode, SlideId::Intro) => "◉",
            (IconSet::Unicode, SlideId::Engine) => "⚙",
            (IconSet::Unicode, SlideId::Collaboration) => "⑂",
            (IconSet::Unicode, SlideId::Challenges) => "⚡",
            (IconSet::Unicode, SlideId::Tech) => "▣",
            (IconSet::Unicode, SlideId::Workflows) => "⇶",
            (IconSet::NerdFont, SlideId::Intro) => "\u{f007}",
            (IconSet::NerdFont, SlideId::Engine) => "\u{f013}",
            (IconSet::NerdFont, SlideId::Collaboration) => "\u{e725}",
            (IconSet::NerdFont, SlideId::Challenges) => "\u{f0e7}",
            (IconSet::NerdFont, SlideId::Tech) => "\u{f2db}",
            (IconSet::NerdFont, SlideId::Workflows) => "\u{f0e8}",
        }
    }
}

/// Glyph family used for slide icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    #[default]
    Unicode,
    #[serde(rename = "nerd", alias = "nerdfont")]
    NerdFont,
}

impl IconSet {
    pub fn globe(self) -> &'static str {
        match self {
            IconSet::Unicode => "◍",
            IconSet::NerdFont => "\u{f0ac}",
        }
    }

    pub fn rocket(self) -> &'static str {
        match self {
            IconSet::Unicode => "➚",
            IconSet::NerdFont => "\u{f135}",
        }
    }
}

/// The clickable controls outside the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    LanguageToggle,
    StepBackward,
    StepForward,
}

/// Screen rectangles registered by the renderer on every frame, used to
/// resolve mouse clicks back to deck operations.
#[derive(Debug, Default)]
pub struct HitRegions {
    pub sidebar: Rect,
    pub content: Rect,
    sidebar_entries: Vec<(SlideId, Rect)>,
    controls: Vec<(ControlKind, Rect, bool)>,
}

impl HitRegions {
    pub fn begin_frame(&mut self) {
        self.sidebar = Rect::default();
        self.content = Rect::default();
        self.sidebar_entries.clear();
        self.controls.clear();
    }

    pub fn register_sidebar_entry(&mut self, slide: SlideId, rect: Rect) {
        self.sidebar_entries.push((slide, rect));
    }

    pub fn register_control(&mut self, kind: ControlKind, rect: Rect, enabled: bool) {
        self.controls.push((kind, rect, enabled));
    }

    pub fn hit_sidebar(&self, column: u16, row: u16) -> Option<SlideId> {
        self.sidebar_entries
            .iter()
            .find(|(_, rect)| rect_contains(rect, column, row))
            .map(|(slide, _)| *slide)
    }

    /// Returns the control under the cursor. Disabled controls never match.
    pub fn hit_control(&self, column: u16, row: u16) -> Option<ControlKind> {
        self.controls
            .iter()
            .find(|(_, rect, enabled)| *enabled && rect_contains(rect, column, row))
            .map(|(kind, _, _)| *kind)
    }

    pub fn control_area(&self, kind: ControlKind) -> Option<Rect> {
        self.controls
            .iter()
            .find(|(candidate, _, _)| *candidate == kind)
            .map(|(_, rect, _)| *rect)
    }

    pub fn sidebar_entry_area(&self, slide: SlideId) -> Option<Rect> {
        self.sidebar_entries
            .iter()
            .find(|(candidate, _)| *candidate == slide)
            .map(|(_, rect)| *rect)
    }
}

pub fn rect_contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        for (idx, slide) in SlideId::ALL.iter().enumerate() {
            assert_eq!(slide.index(), idx);
            assert_eq!(SlideId::from_index(idx), Some(*slide));
        }
        assert_eq!(SlideId::first(), SlideId::Intro);
        assert_eq!(SlideId::last(), SlideId::Workflows);
    }

    #[test]
    fn neighbours_stop_at_the_ends() {
        assert_eq!(SlideId::Intro.previous(), None);
        assert_eq!(SlideId::Workflows.next(), None);
        assert_eq!(SlideId::Tech.next(), Some(SlideId::Workflows));
        assert_eq!(SlideId::Engine.previous(), Some(SlideId::Intro));
    }

    #[test]
    fn disabled_controls_are_not_hit() {
        let mut regions = HitRegions::default();
        regions.register_control(ControlKind::StepBackward, Rect::new(0, 0, 5, 1), false);
        regions.register_control(ControlKind::StepForward, Rect::new(6, 0, 5, 1), true);
        assert_eq!(regions.hit_control(2, 0), None);
        assert_eq!(regions.hit_control(7, 0), Some(ControlKind::StepForward));
        assert_eq!(regions.hit_control(7, 1), None);
    }

    #[test]
    fn begin_frame_forgets_previous_regions() {
        let mut regions = HitRegions::default();
        regions.register_sidebar_entry(SlideId::Tech, Rect::new(0, 0, 10, 1));
        assert_eq!(regions.hit_sidebar(3, 0), Some(SlideId::Tech));
        regions.begin_frame();
        assert_eq!(regions.hit_sidebar(3, 0), None);
    }
}
