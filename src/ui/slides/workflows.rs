use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::SlideContext;
use crate::direction::{Edge, FlowDirection};
use crate::i18n::Phase;
use crate::ui::theme::*;
use crate::ui::widgets::{CardStyle, alignment, card, columns, line, split_edge};

const HEADER_HEIGHT: u16 = 3;
const ITEM_HEIGHT: u16 = 3;
const RAIL_WIDTH: u16 = 3;
const QUOTE_ROWS: u16 = 2;

pub fn render(f: &mut Frame<'_>, ctx: &SlideContext<'_>, area: Rect) {
    let direction = ctx.policy.direction;
    let workflows = &ctx.bundle.workflows;
    if area.height < HEADER_HEIGHT + ITEM_HEIGHT + QUOTE_ROWS {
        return;
    }

    let phases_area = Rect {
        height: area.height - QUOTE_ROWS,
        ..area
    };
    let slots = columns(phases_area, 2, 4, direction);
    let phases = [(&workflows.year1, false), (&workflows.year2, true)];
    for ((phase, highlight), slot) in phases.into_iter().zip(slots) {
        render_phase(f, slot, phase, highlight, ctx.policy.timeline_edge, direction);
    }

    let quote_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    let quote = Paragraph::new(Line::from(Span::styled(
        line(
            &format!("“{}”", workflows.footer_quote),
            quote_area.width,
            direction,
        ),
        Style::default().fg(FG_DIM).add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center);
    f.render_widget(quote, quote_area);
}

fn render_phase(
    f: &mut Frame<'_>,
    area: Rect,
    phase: &Phase,
    highlight: bool,
    rail_edge: Edge,
    direction: FlowDirection,
) {
    let tag_style = if highlight {
        Style::default().fg(ACCENT_TEXT).bg(ACCENT)
    } else {
        Style::default().fg(ACCENT).bg(ACCENT_SOFT_BG)
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            line(&format!(" {} ", phase.tag), area.width, direction),
            tag_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            line(&phase.title, area.width, direction),
            Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(alignment(direction));
    f.render_widget(
        header,
        Rect {
            height: HEADER_HEIGHT.min(area.height),
            ..area
        },
    );

    let body = Rect {
        y: area.y + HEADER_HEIGHT,
        height: area.height.saturating_sub(HEADER_HEIGHT),
        ..area
    };
    let (rail, items_area) = split_edge(body, rail_edge, RAIL_WIDTH);
    let fits = usize::from(items_area.height / ITEM_HEIGHT);
    let shown = phase.items.len().min(fits);
    if shown == 0 {
        return;
    }

    let dot_style = if highlight {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER_IDLE)
    };
    let rail_rows = (0..shown as u16 * ITEM_HEIGHT)
        .map(|row| {
            if row % ITEM_HEIGHT == ITEM_HEIGHT / 2 {
                Line::from(Span::styled("●", dot_style))
            } else {
                Line::from(Span::styled("│", Style::default().fg(BORDER_IDLE)))
            }
        })
        .collect::<Vec<_>>();
    f.render_widget(Paragraph::new(rail_rows).alignment(Alignment::Center), rail);

    let style = if highlight {
        CardStyle::SOFT
    } else {
        CardStyle::PLAIN
    };
    for (idx, item) in phase.items.iter().take(shown).enumerate() {
        let slot = Rect {
            y: items_area.y + idx as u16 * ITEM_HEIGHT,
            height: ITEM_HEIGHT,
            ..items_area
        };
        card(f, slot, item, "", direction, style);
    }
}
