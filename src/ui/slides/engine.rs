use std::f64::consts::TAU;

use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::SlideContext;
use crate::definitions::SlideId;
use crate::ui::theme::*;
use crate::ui::widgets::{CardStyle, card};

const HUB_TITLE: &str = "CS Engine";
const HUB_SUBTITLE: &str = "Core Infrastructure";
const HUB_WIDTH: u16 = 23;
const HUB_HEIGHT: u16 = 5;
const STEP_WIDTH: u16 = 24;
const STEP_HEIGHT: u16 = 4;

/// Unit-circle offsets for `count` items spaced `360° / count` apart,
/// starting at three o'clock and turning clockwise on screen.
pub fn ring_offsets(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|idx| {
            let angle = idx as f64 / count as f64 * TAU;
            (angle.cos(), angle.sin())
        })
        .collect()
}

pub fn render(f: &mut Frame<'_>, ctx: &SlideContext<'_>, area: Rect) {
    let direction = ctx.policy.direction;
    let steps = &ctx.bundle.engine.steps;
    if area.width < STEP_WIDTH * 2 || area.height < HUB_HEIGHT + 2 {
        return;
    }

    // Guide ring behind the cards.
    let ring = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|painter| {
            painter.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.8,
                color: BORDER_IDLE,
            });
        });
    f.render_widget(ring, area);

    let center_x = f64::from(area.x) + f64::from(area.width) / 2.0;
    let center_y = f64::from(area.y) + f64::from(area.height) / 2.0;
    let radius_x = (f64::from(area.width) - f64::from(STEP_WIDTH)) / 2.0 * 0.8;
    let radius_y = (f64::from(area.height) - f64::from(STEP_HEIGHT)) / 2.0 * 0.9;

    for (step, (dx, dy)) in steps.iter().zip(ring_offsets(steps.len())) {
        let slot = place(
            area,
            center_x + dx * radius_x,
            center_y + dy * radius_y,
            STEP_WIDTH,
            STEP_HEIGHT,
        );
        f.render_widget(Clear, slot);
        card(f, slot, &step.title, &step.desc, direction, CardStyle::PLAIN);
    }

    let hub = place(area, center_x, center_y, HUB_WIDTH, HUB_HEIGHT);
    f.render_widget(Clear, hub);
    let hub_widget = Paragraph::new(vec![
        Line::from(Span::styled(
            SlideId::Engine.icon(ctx.icons),
            Style::default().fg(ACCENT_TEXT),
        )),
        Line::from(Span::styled(
            HUB_TITLE,
            Style::default().fg(ACCENT_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HUB_SUBTITLE.to_uppercase(),
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
    f.render_widget(hub_widget, hub);
}

/// A `width` x `height` rect centred on `(x, y)`, clamped inside `area`.
fn place(area: Rect, x: f64, y: f64, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;
    let left = (x - f64::from(width) / 2.0).round().max(f64::from(area.x)) as u16;
    let top = (y - f64::from(height) / 2.0).round().max(f64::from(area.y)) as u16;
    Rect {
        x: left.min(max_x),
        y: top.min(max_y),
        width,
        height,
    }
}
