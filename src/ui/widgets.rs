//! Direction-aware building blocks shared by the slide renderers.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::theme::*;
use crate::bidi;
use crate::direction::{Edge, FlowDirection};

pub fn alignment(direction: FlowDirection) -> Alignment {
    if direction.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Wrapped, visually ordered and aligned text.
pub fn text(content: &str, width: u16, direction: FlowDirection, style: Style) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = bidi::shape(content, usize::from(width.max(1)), direction)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect();
    Paragraph::new(lines)
        .alignment(alignment(direction))
        .style(style)
}

/// A single visually ordered line, truncated to `width`.
pub fn line(content: &str, width: u16, direction: FlowDirection) -> String {
    bidi::visual_line(&bidi::truncate(content, usize::from(width)), direction)
}

/// Number of rows `content` needs when wrapped to `width`.
pub fn text_height(content: &str, width: u16) -> u16 {
    bidi::wrap(content, usize::from(width.max(1))).len() as u16
}

/// Splits `area` into `count` equal columns, ordered in reading direction.
pub fn columns(area: Rect, count: usize, gap: u16, direction: FlowDirection) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let mut constraints = Vec::with_capacity(count * 2);
    for idx in 0..count {
        if idx > 0 {
            constraints.push(Constraint::Length(gap));
        }
        constraints.push(Constraint::Ratio(1, count as u32));
    }
    let mut rects: Vec<Rect> = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .iter()
        .copied()
        .enumerate()
        .filter(|(idx, _)| idx % 2 == 0)
        .map(|(_, rect)| rect)
        .collect();
    if direction.is_rtl() {
        rects.reverse();
    }
    rects
}

/// Cuts a strip of `width` columns off `edge`, returning `(strip, rest)`.
pub fn split_edge(area: Rect, edge: Edge, width: u16) -> (Rect, Rect) {
    let width = width.min(area.width);
    let rest_width = area.width - width;
    match edge {
        Edge::Left => (
            Rect { width, ..area },
            Rect {
                x: area.x + width,
                width: rest_width,
                ..area
            },
        ),
        Edge::Right => (
            Rect {
                x: area.x + rest_width,
                width,
                ..area
            },
            Rect {
                width: rest_width,
                ..area
            },
        ),
    }
}

/// Shrinks `area` by `amount` columns from `edge`.
pub fn inset_from(area: Rect, edge: Edge, amount: u16) -> Rect {
    split_edge(area, edge, amount).1
}

pub fn pad(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal * 2),
        height: area.height.saturating_sub(vertical * 2),
    }
}

/// A bordered card with a bold title and a wrapped body.
pub fn card(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    body: &str,
    direction: FlowDirection,
    style: CardStyle,
) {
    if area.width < 4 || area.height < 2 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border))
        .style(Style::default().bg(style.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let title_line = Paragraph::new(Line::from(Span::styled(
        line(title, inner.width, direction),
        Style::default()
            .fg(style.title)
            .bg(style.bg)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(alignment(direction));
    f.render_widget(title_line, Rect { height: 1, ..inner });

    if inner.height > 1 && !body.is_empty() {
        let body_area = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        f.render_widget(
            text(
                body,
                body_area.width,
                direction,
                Style::default().fg(style.body).bg(style.bg),
            ),
            body_area,
        );
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CardStyle {
    pub bg: Color,
    pub border: Color,
    pub title: Color,
    pub body: Color,
}

impl CardStyle {
    pub const PLAIN: CardStyle = CardStyle {
        bg: BG_PANEL,
        border: BORDER_IDLE,
        title: FG_PRIMARY,
        body: FG_BODY,
    };

    pub const ACCENT: CardStyle = CardStyle {
        bg: ACCENT,
        border: ACCENT,
        title: ACCENT_TEXT,
        body: ACCENT_SOFT_BG,
    };

    pub const SOFT: CardStyle = CardStyle {
        bg: ACCENT_SOFT_BG,
        border: ACCENT_STRONG_BG,
        title: ACCENT,
        body: ACCENT,
    };
}

/// Title and subtitle at the top of a slide. Returns the rows used.
pub fn heading(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    subtitle: &str,
    direction: FlowDirection,
) -> u16 {
    if area.height == 0 {
        return 0;
    }
    let title_par = Paragraph::new(Line::from(Span::styled(
        line(title, area.width, direction),
        Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
    )))
    .alignment(alignment(direction));
    f.render_widget(title_par, Rect { height: 1, ..area });

    let sub_height = if subtitle.is_empty() {
        0
    } else {
        text_height(subtitle, area.width).min(area.height.saturating_sub(1))
    };
    if sub_height > 0 {
        let sub_area = Rect {
            y: area.y + 1,
            height: sub_height,
            ..area
        };
        f.render_widget(
            text(subtitle, area.width, direction, Style::default().fg(FG_BODY)),
            sub_area,
        );
    }
    1 + sub_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_reading_direction() {
        let area = Rect::new(0, 0, 32, 4);
        let ltr = columns(area, 3, 1, FlowDirection::Ltr);
        let rtl = columns(area, 3, 1, FlowDirection::Rtl);
        assert_eq!(ltr.len(), 3);
        assert!(ltr[0].x < ltr[1].x && ltr[1].x < ltr[2].x);
        assert_eq!(rtl[0], ltr[2]);
        assert_eq!(rtl[2], ltr[0]);
    }

    #[test]
    fn split_edge_takes_the_requested_side() {
        let area = Rect::new(10, 2, 100, 20);
        let (strip, rest) = split_edge(area, Edge::Right, 30);
        assert_eq!(strip, Rect::new(80, 2, 30, 20));
        assert_eq!(rest, Rect::new(10, 2, 70, 20));
        let (strip, rest) = split_edge(area, Edge::Left, 30);
        assert_eq!(strip, Rect::new(10, 2, 30, 20));
        assert_eq!(rest, Rect::new(40, 2, 70, 20));
    }

    #[test]
    fn split_edge_clamps_to_the_area() {
        let area = Rect::new(0, 0, 10, 5);
        let (strip, rest) = split_edge(area, Edge::Left, 50);
        assert_eq!(strip.width, 10);
        assert_eq!(rest.width, 0);
    }
}
