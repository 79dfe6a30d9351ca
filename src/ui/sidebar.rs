use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::theme::*;
use super::widgets::{alignment, line, pad, text, text_height};
use crate::definitions::{HitRegions, IconSet};
use crate::direction::Edge;
use crate::view::DeckView;

pub const SIDEBAR_WIDTH: u16 = 32;

/// Draws the slide list and records one click region per entry.
pub fn render_sidebar(
    f: &mut Frame<'_>,
    view: &DeckView<'_>,
    icons: IconSet,
    area: Rect,
    regions: &mut HitRegions,
) {
    let direction = view.policy.direction;
    let nav = &view.bundle.nav;

    // The border faces the content area.
    let border = match view.policy.sidebar_edge {
        Edge::Left => Borders::RIGHT,
        Edge::Right => Borders::LEFT,
    };
    let block = Block::default()
        .borders(border)
        .border_style(Style::default().fg(BORDER_IDLE))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);
    regions.sidebar = area;

    let body = pad(inner, 2, 1);
    if body.height < 4 {
        return;
    }

    // Header: title, then "name | role".
    let title = format!("{} {}", icons.rocket(), nav.portfolio_title);
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            line(&title, body.width, direction),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            line(&format!("{} | {}", nav.name, nav.role), body.width, direction),
            Style::default().fg(FG_DIM),
        )),
    ])
    .alignment(alignment(direction));
    f.render_widget(header, Rect { height: 2, ..body });

    // Footer description, pinned to the bottom.
    let desc_height = text_height(&nav.presentation_desc, body.width).min(body.height / 4);
    let desc_area = Rect {
        y: body.y + body.height - desc_height,
        height: desc_height,
        ..body
    };
    f.render_widget(
        text(
            &nav.presentation_desc,
            desc_area.width,
            direction,
            Style::default().fg(FG_DIM),
        ),
        desc_area,
    );

    // Entries between header and footer, spaced out when there is room.
    let mut y = body.y + 4;
    let limit = desc_area.y.saturating_sub(1);
    let wanted = (view.sidebar.len() as u16 * 2).saturating_sub(1);
    let spacing = if limit.saturating_sub(y) >= wanted { 2 } else { 1 };
    for entry in &view.sidebar {
        if y >= limit {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        let (fg, bg, marker) = if entry.active {
            (ACCENT, ACCENT_SOFT_BG, "▌")
        } else {
            (FG_BODY, BG_PANEL, " ")
        };
        let style = Style::default().fg(fg).bg(bg);
        let label_width = row.width.saturating_sub(4);
        let label = line(&format!("{} {}", entry.icon, entry.title), label_width, direction);
        let label_style = if entry.active {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };
        // The active marker sits on the reading-start edge.
        let spans = if direction.is_rtl() {
            vec![
                Span::styled(label, label_style),
                Span::styled(" ", style),
                Span::styled(marker, style),
            ]
        } else {
            vec![
                Span::styled(marker, style),
                Span::styled(" ", style),
                Span::styled(label, label_style),
            ]
        };
        f.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(alignment(direction))
                .style(style),
            row,
        );
        regions.register_sidebar_entry(entry.slide, row);
        y += spacing;
    }
}
