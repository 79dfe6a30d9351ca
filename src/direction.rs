//! Bidirectional layout policy.
//!
//! Every direction-sensitive decision in the UI (which edge the sidebar sits
//! on, which arrow means "next", where the toggle goes) is answered here from
//! the active language alone. Renderers and input handlers never inspect the
//! language themselves.

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Ltr,
    Rtl,
}

impl FlowDirection {
    pub fn is_rtl(self) -> bool {
        self == FlowDirection::Rtl
    }

    /// Edge where reading starts.
    pub fn start_edge(self) -> Edge {
        match self {
            FlowDirection::Ltr => Edge::Left,
            FlowDirection::Rtl => Edge::Right,
        }
    }

    /// Arrow pointing the way text advances.
    pub fn reading_arrow(self) -> ArrowGlyph {
        match self {
            FlowDirection::Ltr => ArrowGlyph::Right,
            FlowDirection::Rtl => ArrowGlyph::Left,
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            FlowDirection::Ltr => "ltr",
            FlowDirection::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub fn opposite(self) -> Self {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowGlyph {
    Left,
    Right,
}

impl ArrowGlyph {
    pub fn symbol(self) -> &'static str {
        match self {
            ArrowGlyph::Left => "‹",
            ArrowGlyph::Right => "›",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ArrowGlyph::Left => ArrowGlyph::Right,
            ArrowGlyph::Right => ArrowGlyph::Left,
        }
    }
}

/// A logical move through the slide order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Backward,
    Forward,
}

/// Everything direction dependent, derived from the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub direction: FlowDirection,
    /// The trailing edge: left in Hebrew, right in English.
    pub sidebar_edge: Edge,
    /// Side of the content area holding the language toggle and the step
    /// controls. Shares the sidebar's edge.
    pub controls_edge: Edge,
    pub forward_glyph: ArrowGlyph,
    pub backward_glyph: ArrowGlyph,
    /// Edge a newly shown slide slides in from.
    pub entry_edge: Edge,
    /// Side of the workflow timeline rail.
    pub timeline_edge: Edge,
}

pub fn layout_policy(language: Language) -> LayoutPolicy {
    let direction = if language.is_rtl() {
        FlowDirection::Rtl
    } else {
        FlowDirection::Ltr
    };
    let start = direction.start_edge();
    let trailing = start.opposite();
    let forward_glyph = direction.reading_arrow();
    LayoutPolicy {
        direction,
        sidebar_edge: trailing,
        controls_edge: trailing,
        forward_glyph,
        backward_glyph: forward_glyph.opposite(),
        entry_edge: trailing,
        timeline_edge: start,
    }
}

impl LayoutPolicy {
    pub fn glyph(&self, step: Step) -> ArrowGlyph {
        match step {
            Step::Forward => self.forward_glyph,
            Step::Backward => self.backward_glyph,
        }
    }

    /// The two step controls in on-screen order, left to right. The control
    /// whose arrow points left is always drawn on the left.
    pub fn controls_visual_order(&self) -> [Step; 2] {
        if self.forward_glyph == ArrowGlyph::Left {
            [Step::Forward, Step::Backward]
        } else {
            [Step::Backward, Step::Forward]
        }
    }

    /// Logical step for a physical arrow key.
    pub fn step_for_arrow(&self, arrow: ArrowGlyph) -> Step {
        if arrow == self.forward_glyph {
            Step::Forward
        } else {
            Step::Backward
        }
    }
}
