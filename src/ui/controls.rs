use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::theme::*;
use crate::bidi;
use crate::definitions::{ControlKind, HitRegions, IconSet};
use crate::direction::{Edge, FlowDirection, Step};
use crate::view::{DeckView, NavControl};

const BUTTON_WIDTH: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;
const MARGIN: u16 = 2;

fn anchored(area: Rect, edge: Edge, width: u16, height: u16, y: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(MARGIN));
    let x = match edge {
        Edge::Left => area.x + MARGIN.min(area.width),
        Edge::Right => (area.x + area.width).saturating_sub(width + MARGIN),
    };
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}

/// Width the toggle occupies, so slide headings can keep clear of it.
pub fn toggle_width(view: &DeckView<'_>, icons: IconSet) -> u16 {
    let label = format!("{} {}", icons.globe(), view.toggle_label);
    UnicodeWidthStr::width(label.as_str()) as u16 + 4 + MARGIN
}

/// The language toggle, top corner on the controls edge.
pub fn render_language_toggle(
    f: &mut Frame<'_>,
    view: &DeckView<'_>,
    icons: IconSet,
    content: Rect,
    regions: &mut HitRegions,
) {
    let label = format!("{} {}", icons.globe(), view.toggle_label);
    // The label is in the *other* language, so shape it in that direction.
    let label_direction = if view.language.other().is_rtl() {
        FlowDirection::Rtl
    } else {
        FlowDirection::Ltr
    };
    let label = bidi::visual_line(&label, label_direction);
    let width = UnicodeWidthStr::width(label.as_str()) as u16 + 4;
    let area = anchored(content, view.policy.controls_edge, width, BUTTON_HEIGHT, content.y);
    if area.width < 4 || area.height < BUTTON_HEIGHT {
        return;
    }
    f.render_widget(Clear, area);
    let button = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(FG_BODY).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_IDLE))
            .style(Style::default().bg(BG_PANEL)),
    );
    f.render_widget(button, area);
    regions.register_control(ControlKind::LanguageToggle, area, true);
}

/// The two step controls, bottom corner on the controls edge.
pub fn render_step_controls(
    f: &mut Frame<'_>,
    view: &DeckView<'_>,
    content: Rect,
    regions: &mut HitRegions,
) {
    let total = BUTTON_WIDTH * 2 + 1;
    let y = (content.y + content.height).saturating_sub(BUTTON_HEIGHT);
    let area = anchored(content, view.policy.controls_edge, total, BUTTON_HEIGHT, y);
    if area.width < total || area.height < BUTTON_HEIGHT {
        return;
    }
    for (idx, control) in view.controls.iter().enumerate() {
        let rect = Rect {
            x: area.x + idx as u16 * (BUTTON_WIDTH + 1),
            y: area.y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };
        render_step_button(f, rect, control);
        let kind = match control.step {
            Step::Forward => ControlKind::StepForward,
            Step::Backward => ControlKind::StepBackward,
        };
        regions.register_control(kind, rect, control.enabled);
    }
}

fn render_step_button(f: &mut Frame<'_>, area: Rect, control: &NavControl) {
    let (fg, border) = if control.enabled {
        (ACCENT, ACCENT_STRONG_BG)
    } else {
        (BORDER_IDLE, BORDER_IDLE)
    };
    f.render_widget(Clear, area);
    let button = Paragraph::new(Line::from(Span::styled(
        control.glyph.symbol(),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(BG_PANEL)),
    );
    f.render_widget(button, area);
}
