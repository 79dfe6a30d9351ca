use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::bidi;
use crate::direction::FlowDirection;
use crate::view::DeckView;

mod controls;
mod sidebar;
pub mod slides;
mod theme;
mod widgets;

use controls::{render_language_toggle, render_step_controls, toggle_width};
use sidebar::{SIDEBAR_WIDTH, render_sidebar};
use slides::{SlideContext, render_slide};
use theme::*;
use widgets::{inset_from, pad, split_edge};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

const TOO_SMALL_HE: &str = "המסוף קטן מדי";

/// Columns a slide is pushed in from its entry edge when a transition starts.
const TRANSITION_INSET: u16 = 8;

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    app.regions.begin_frame();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let notice = Paragraph::new(vec![
            Line::from(format!(
                "Terminal too small, resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
            )),
            Line::from(bidi::visual_line(TOO_SMALL_HE, FlowDirection::Rtl)),
        ])
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("folio")
                .borders(Borders::ALL)
                .style(Style::default().fg(FG_PRIMARY).bg(BG_PANEL)),
        )
        .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(notice, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let view = DeckView::derive(&app.presentation, &app.translations, app.icons);
    let (sidebar_area, content) = split_edge(size, view.policy.sidebar_edge, SIDEBAR_WIDTH);
    render_sidebar(f, &view, app.icons, sidebar_area, &mut app.regions);

    let content = pad(content, 3, 1);
    app.regions.content = content;

    let inset = app
        .transition
        .map_or(0, |transition| transition.inset(Instant::now(), TRANSITION_INSET));
    let slide_area = match app.transition {
        Some(transition) if inset > 0 => inset_from(content, transition.from, inset),
        _ => content,
    };

    let ctx = SlideContext {
        bundle: view.bundle,
        policy: view.policy,
        icons: app.icons,
        marquee_offset: app.marquee_offset,
        toggle_reserve: toggle_width(&view, app.icons),
    };
    render_slide(f, &ctx, view.slide, slide_area);

    render_language_toggle(f, &view, app.icons, content, &mut app.regions);
    render_step_controls(f, &view, content, &mut app.regions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckSettings;
    use crate::definitions::{ControlKind, SlideId};
    use crate::i18n::{Language, Translations};
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn app(language: Language) -> App {
        let settings = DeckSettings {
            default_language: language,
            transition_ms: 0,
            ..DeckSettings::default()
        };
        App::new(settings, Translations::builtin().unwrap())
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
    }

    #[test]
    fn hebrew_puts_sidebar_on_the_trailing_left_edge() {
        let mut app = app(Language::He);
        draw(&mut app, 120, 36);
        assert_eq!(app.regions.sidebar.x, 0);
        assert!(app.regions.content.x > app.regions.sidebar.x);
    }

    #[test]
    fn english_puts_sidebar_on_the_trailing_right_edge() {
        let mut app = app(Language::En);
        draw(&mut app, 120, 36);
        assert!(app.regions.sidebar.x > app.regions.content.x);
        assert_eq!(app.regions.sidebar.right(), 120);
    }

    #[test]
    fn every_entry_and_control_gets_a_region() {
        let mut app = app(Language::En);
        draw(&mut app, 120, 36);
        for slide in SlideId::ALL {
            assert!(app.regions.sidebar_entry_area(slide).is_some(), "{slide:?}");
        }
        for kind in [
            ControlKind::LanguageToggle,
            ControlKind::StepBackward,
            ControlKind::StepForward,
        ] {
            assert!(app.regions.control_area(kind).is_some(), "{kind:?}");
        }
    }

    #[test]
    fn toggle_sits_on_the_trailing_side_of_the_content() {
        let mut he = app(Language::He);
        draw(&mut he, 120, 36);
        let content = he.regions.content;
        let toggle = he.regions.control_area(ControlKind::LanguageToggle).unwrap();
        assert!(toggle.x < content.x + 5);

        let mut en = app(Language::En);
        draw(&mut en, 120, 36);
        let content = en.regions.content;
        let toggle = en.regions.control_area(ControlKind::LanguageToggle).unwrap();
        assert!(toggle.right() + 5 > content.right());
        assert!(toggle.right() <= content.right());
    }

    #[test]
    fn hebrew_forward_control_is_the_left_one() {
        let mut app = app(Language::He);
        draw(&mut app, 120, 36);
        let forward = app.regions.control_area(ControlKind::StepForward).unwrap();
        let backward = app.regions.control_area(ControlKind::StepBackward).unwrap();
        assert!(forward.x < backward.x);
    }

    #[test]
    fn every_slide_renders_in_both_languages() {
        for language in Language::ALL {
            let mut app = app(language);
            for slide in SlideId::ALL {
                app.set_active_slide(slide);
                for (width, height) in [(80, 24), (120, 36), (200, 60)] {
                    draw(&mut app, width, height);
                }
            }
        }
    }

    #[test]
    fn small_terminal_shows_a_notice_and_no_regions() {
        let mut app = app(Language::He);
        let terminal = draw(&mut app, 60, 20);
        assert_eq!(app.regions.sidebar, Rect::default());
        assert!(app.regions.hit_sidebar(1, 1).is_none());
        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect()
        };
        assert!(row(1).contains("Terminal"));
    }

    #[test]
    fn small_terminal_notice_shows_hebrew_in_visual_order() {
        let mut app = app(Language::He);
        let terminal = draw(&mut app, 60, 20);
        let buffer = terminal.backend().buffer();
        let hebrew: String = (0..buffer.area.width)
            .map(|x| buffer.get(x, 2).symbol().to_string())
            .collect();
        let visual = bidi::visual_line(TOO_SMALL_HE, FlowDirection::Rtl);
        assert_ne!(visual, TOO_SMALL_HE);
        assert!(hebrew.contains(&visual));
        assert!(!hebrew.contains(TOO_SMALL_HE));
    }

    fn click(app: &mut App, rect: Rect) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn clicking_a_sidebar_entry_jumps_there() {
        let mut app = app(Language::En);
        app.set_active_slide(SlideId::Tech);
        draw(&mut app, 120, 36);
        let entry = app.regions.sidebar_entry_area(SlideId::Collaboration).unwrap();
        click(&mut app, entry);
        assert_eq!(app.active_slide(), SlideId::Collaboration);
        assert_eq!(app.active_language(), Language::En);
    }

    #[test]
    fn clicking_the_toggle_switches_language_and_mirrors_layout() {
        let mut app = app(Language::He);
        app.set_active_slide(SlideId::Engine);
        draw(&mut app, 120, 36);
        let toggle = app.regions.control_area(ControlKind::LanguageToggle).unwrap();
        click(&mut app, toggle);
        assert_eq!(app.active_language(), Language::En);
        assert_eq!(app.active_slide(), SlideId::Engine);
        draw(&mut app, 120, 36);
        assert_eq!(app.regions.sidebar.right(), 120);
    }

    #[test]
    fn disabled_step_control_ignores_clicks() {
        let mut app = app(Language::He);
        draw(&mut app, 120, 36);
        let backward = app.regions.control_area(ControlKind::StepBackward).unwrap();
        click(&mut app, backward);
        assert_eq!(app.active_slide(), SlideId::Intro);
        let forward = app.regions.control_area(ControlKind::StepForward).unwrap();
        click(&mut app, forward);
        assert_eq!(app.active_slide(), SlideId::Engine);
    }

    #[test]
    fn walking_the_deck_with_the_forward_control() {
        let mut app = app(Language::He);
        for _ in 0..6 {
            draw(&mut app, 120, 36);
            if let Some(forward) = app.regions.control_area(ControlKind::StepForward) {
                click(&mut app, forward);
            }
        }
        assert_eq!(app.active_slide(), SlideId::Workflows);
    }

    #[test]
    fn active_entry_is_marked_in_the_buffer() {
        let mut app = app(Language::En);
        app.set_active_slide(SlideId::Challenges);
        let terminal = draw(&mut app, 120, 36);
        let entry = app.regions.sidebar_entry_area(SlideId::Challenges).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.get(entry.x, entry.y).symbol(), "▌");
    }
}
