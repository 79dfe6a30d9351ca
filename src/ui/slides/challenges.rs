use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::SlideContext;
use crate::ui::theme::*;
use crate::ui::widgets::{CardStyle, card, columns};

/// Systems shown in the scrolling marquee.
pub const SYSTEMS: [&str; 18] = [
    "HubSpot",
    "Salesforce",
    "Zendesk",
    "Intercom",
    "Gainsight",
    "Totango",
    "Jira",
    "Monday",
    "ERP",
    "SaaS",
    "FCP",
    "OpenAI",
    "Claude",
    "Gemini",
    "Mixpanel",
    "Tableau",
    "PowerBI",
    "Slack",
];

const ITEMS_PER_ROW: usize = 4;
const ITEM_HEIGHT: u16 = 5;
const INNOVATION_HEIGHT: u16 = 6;

pub fn render(f: &mut Frame<'_>, ctx: &SlideContext<'_>, area: Rect) {
    let direction = ctx.policy.direction;
    let challenges = &ctx.bundle.challenges;
    let mut y = area.y;
    let bottom = area.y + area.height;

    for chunk in challenges.items.chunks(ITEMS_PER_ROW) {
        if y + ITEM_HEIGHT > bottom {
            break;
        }
        let row = Rect {
            y,
            height: ITEM_HEIGHT,
            ..area
        };
        for (item, slot) in chunk.iter().zip(columns(row, ITEMS_PER_ROW, 1, direction)) {
            let title = format!("⚡ {}", item.title);
            card(f, slot, &title, &item.desc, direction, CardStyle::PLAIN);
        }
        y += ITEM_HEIGHT + 1;
    }

    if y + INNOVATION_HEIGHT <= bottom {
        let row = Rect {
            y,
            height: INNOVATION_HEIGHT,
            ..area
        };
        let count = challenges.innovation_items.len();
        for (item, slot) in challenges
            .innovation_items
            .iter()
            .zip(columns(row, count, 2, direction))
        {
            card(f, slot, &item.title, &item.desc, direction, CardStyle::ACCENT);
        }
        y += INNOVATION_HEIGHT + 1;
    }

    // The marquee always takes the last rows that are left.
    if y + 2 <= bottom {
        let strip = Rect {
            y: bottom - 2,
            height: 2,
            ..area
        };
        let window = marquee_window(&SYSTEMS, ctx.marquee_offset, usize::from(strip.width));
        let marquee = Paragraph::new(Line::from(Span::styled(
            window,
            Style::default().fg(FG_DIM).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(BORDER_IDLE)),
        );
        f.render_widget(marquee, strip);
    }
}

/// The visible slice of an endlessly repeating ticker. Increasing `offset`
/// by one scrolls the text one column to the left.
pub fn marquee_window(items: &[&str], offset: usize, width: usize) -> String {
    let tape: Vec<char> = items
        .iter()
        .flat_map(|item| format!("●  {}     ", item.to_uppercase()).chars().collect::<Vec<_>>())
        .collect();
    if tape.is_empty() || width == 0 {
        return String::new();
    }
    let start = offset % tape.len();
    tape.iter().cycle().skip(start).take(width).collect()
}
