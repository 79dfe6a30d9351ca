use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::SlideContext;
use crate::bidi;
use crate::direction::FlowDirection;
use crate::i18n::MAX_DEPARTMENTS;
use crate::ui::theme::*;
use crate::ui::widgets::{columns, line};

const ROW_SIZE: usize = MAX_DEPARTMENTS / 2;
const DEPT_HEIGHT: u16 = 3;
const BRIDGE_HEIGHT: u16 = 5;
const PARTICLES: usize = 10;

pub fn render(f: &mut Frame<'_>, ctx: &SlideContext<'_>, area: Rect) {
    let direction = ctx.policy.direction;
    let collab = &ctx.bundle.collaboration;
    let needed = DEPT_HEIGHT * 2 + BRIDGE_HEIGHT + 2;
    if area.height < needed {
        return;
    }
    let top = area.y + (area.height - needed) / 2;

    let split = collab.departments.len().min(ROW_SIZE);
    let (upper, lower) = collab.departments.split_at(split);
    let upper_row = Rect {
        y: top,
        height: DEPT_HEIGHT,
        ..area
    };
    render_departments(f, upper_row, upper, direction);

    let bridge = Rect {
        y: top + DEPT_HEIGHT + 1,
        height: BRIDGE_HEIGHT,
        ..area
    };
    let band_width = usize::from(bridge.width.saturating_sub(2));
    let label = bidi::visual_line(&format!("≡  {}  ≡", collab.bridge_text), direction);
    let band = Paragraph::new(vec![
        Line::from(Span::styled(
            particle_row(band_width, ctx.marquee_offset),
            Style::default().fg(ACCENT_SOFT_BG),
        )),
        Line::from(Span::styled(
            label,
            Style::default().fg(ACCENT_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            particle_row(band_width, ctx.marquee_offset.wrapping_add(band_width / 2)),
            Style::default().fg(ACCENT_SOFT_BG),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(ACCENT)),
    );
    f.render_widget(band, bridge);

    let lower_row = Rect {
        y: bridge.y + BRIDGE_HEIGHT + 1,
        height: DEPT_HEIGHT,
        ..area
    };
    render_departments(f, lower_row, lower, direction);
}

fn render_departments(
    f: &mut Frame<'_>,
    row: Rect,
    departments: &[String],
    direction: FlowDirection,
) {
    let slots = columns(row, ROW_SIZE, 2, direction);
    for (name, slot) in departments.iter().zip(slots) {
        let tile = Paragraph::new(Line::from(Span::styled(
            line(name, slot.width.saturating_sub(2), direction),
            Style::default().fg(ACCENT_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT_STRONG_BG))
                .style(Style::default().bg(ACCENT_STRONG_BG)),
        );
        f.render_widget(tile, slot);
    }
}

/// A row of drifting dots; each call with a larger offset moves them right.
fn particle_row(width: usize, offset: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut row = vec![' '; width];
    let spacing = (width / PARTICLES).max(1);
    for idx in 0..PARTICLES {
        let pos = (idx * spacing + idx * idx + offset) % width;
        row[pos] = '·';
    }
    row.into_iter().collect()
}
