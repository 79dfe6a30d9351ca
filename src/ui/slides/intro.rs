use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::SlideContext;
use crate::ui::theme::*;
use crate::ui::widgets::{
    CardStyle, alignment, card, columns, line, split_edge, text, text_height,
};

const INDUSTRIES: [&str; 5] = ["SaaS", "FinTech", "CRM", "ERP", "Real Estate Tech"];
const STAT_ICONS: [&str; 4] = ["↗", "▇", "⚡", "◈"];

const CARDS_HEIGHT: u16 = 8;
const STATS_HEIGHT: u16 = 5;

pub fn render(f: &mut Frame<'_>, ctx: &SlideContext<'_>, area: Rect) {
    let direction = ctx.policy.direction;
    let intro = &ctx.bundle.intro;
    let nav = &ctx.bundle.nav;

    // Hero: tag, name, description, kept clear of the toggle.
    let (_, hero) = split_edge(area, ctx.policy.controls_edge, ctx.toggle_reserve);
    let desc_rows = text_height(&intro.description, hero.width).min(3);
    let hero_lines = vec![
        Line::from(Span::styled(
            line(&format!(" {} ", intro.tag), hero.width, direction),
            Style::default()
                .fg(ACCENT)
                .bg(ACCENT_SOFT_BG)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            line(&nav.name, hero.width, direction).to_uppercase(),
            Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
        )),
    ];
    let hero_head = Rect {
        height: 3.min(hero.height),
        ..hero
    };
    f.render_widget(
        Paragraph::new(hero_lines).alignment(alignment(direction)),
        hero_head,
    );
    let desc_area = Rect {
        y: hero.y + 4,
        height: desc_rows.min(area.height.saturating_sub(4)),
        ..hero
    };
    f.render_widget(
        text(&intro.description, desc_area.width, direction, Style::default().fg(FG_BODY)),
        desc_area,
    );

    // Industries and expertise cards.
    let cards_y = desc_area.y + desc_area.height + 1;
    let cards_height = CARDS_HEIGHT.min((area.y + area.height).saturating_sub(cards_y));
    if cards_height >= 3 {
        let row = Rect {
            y: cards_y,
            height: cards_height,
            ..area
        };
        let slots = columns(row, 2, 2, direction);
        card(
            f,
            slots[0],
            &intro.industries_title,
            &INDUSTRIES.join("  ·  "),
            direction,
            CardStyle::PLAIN,
        );
        let expertise = intro
            .expertise_items
            .iter()
            .map(|item| format!("• {item}"))
            .collect::<Vec<_>>()
            .join("\n");
        card(
            f,
            slots[1],
            &intro.expertise_title,
            &expertise,
            direction,
            CardStyle::PLAIN,
        );
    }

    // Stats row.
    let stats_y = cards_y + cards_height + 1;
    if stats_y + STATS_HEIGHT <= area.y + area.height {
        let row = Rect {
            y: stats_y,
            height: STATS_HEIGHT,
            ..area
        };
        let slots = columns(row, intro.stats.len(), 2, direction);
        for (idx, (stat, slot)) in intro.stats.iter().zip(slots).enumerate() {
            let color = STAT_COLORS[idx % STAT_COLORS.len()];
            let lines = vec![
                Line::from(Span::styled(
                    STAT_ICONS[idx % STAT_ICONS.len()],
                    Style::default().fg(color),
                )),
                Line::from(Span::styled(
                    stat.value.clone(),
                    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    line(&stat.label, slot.width.saturating_sub(2), direction).to_uppercase(),
                    Style::default().fg(FG_DIM),
                )),
            ];
            let tile = Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_IDLE))
                    .style(Style::default().bg(BG_PANEL)),
            );
            f.render_widget(tile, slot);
        }
    }
}
