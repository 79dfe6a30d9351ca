use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};

use super::SlideContext;
use crate::bidi;
use crate::i18n::TREND_POINTS;
use crate::ui::theme::*;
use crate::ui::widgets::{CardStyle, card, heading, split_edge};

/// Efficiency trend per month: (with AI, with tech, manual).
pub const TREND: [(f64, f64, f64); TREND_POINTS] = [
    (10.0, 10.0, 10.0),
    (25.0, 18.0, 12.0),
    (50.0, 35.0, 15.0),
    (85.0, 55.0, 18.0),
    (120.0, 75.0, 20.0),
];

const Y_MAX: f64 = 130.0;
const ITEM_HEIGHT: u16 = 5;

pub fn render(f: &mut Frame<'_>, ctx: &SlideContext<'_>, area: Rect) {
    let direction = ctx.policy.direction;
    let tech = &ctx.bundle.tech;
    let (chart_area, side) = split_edge(area, direction.start_edge(), area.width * 2 / 3);
    let side = Rect {
        x: side.x + 1,
        width: side.width.saturating_sub(2),
        ..side
    };

    let ai = series(|(ai, _, _)| ai);
    let with_tech = series(|(_, with_tech, _)| with_tech);
    let manual = series(|(_, _, manual)| manual);
    let datasets = vec![
        Dataset::default()
            .name(bidi::visual_line(&tech.ai_line, direction))
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SERIES_AI))
            .data(&ai),
        Dataset::default()
            .name(bidi::visual_line(&tech.tech_line, direction))
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SERIES_TECH))
            .data(&with_tech),
        Dataset::default()
            .name(bidi::visual_line(&tech.no_tech_line, direction))
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SERIES_MANUAL))
            .data(&manual),
    ];

    // Time runs left to right in both languages; only the labels are shaped.
    let months: Vec<Span> = tech
        .months
        .iter()
        .map(|month| Span::styled(bidi::visual_line(month, direction), Style::default().fg(FG_DIM)))
        .collect();
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_IDLE))
                .title(Span::styled(
                    format!(" {} ", bidi::visual_line(&tech.chart_title, direction)),
                    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(BG_PANEL)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(BORDER_IDLE))
                .bounds([0.0, (TREND_POINTS - 1) as f64])
                .labels(months),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(BORDER_IDLE))
                .bounds([0.0, Y_MAX])
                .labels(
                    ["0", "65", "130"]
                        .into_iter()
                        .map(|label| Span::styled(label, Style::default().fg(FG_DIM)))
                        .collect(),
                ),
        );
    f.render_widget(chart, chart_area);

    if side.width < 8 {
        return;
    }
    let used = heading(f, side, &tech.ai_tech_title, "", direction) + 1;
    let mut y = side.y + used;
    for item in &tech.ai_tech_items {
        if y + ITEM_HEIGHT > side.y + side.height {
            break;
        }
        let slot = Rect {
            y,
            height: ITEM_HEIGHT,
            ..side
        };
        card(f, slot, &item.title, &item.desc, direction, CardStyle::SOFT);
        y += ITEM_HEIGHT + 1;
    }
}

fn series(pick: impl Fn((f64, f64, f64)) -> f64) -> Vec<(f64, f64)> {
    TREND
        .iter()
        .enumerate()
        .map(|(idx, point)| (idx as f64, pick(*point)))
        .collect()
}
