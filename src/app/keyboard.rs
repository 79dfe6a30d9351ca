use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use super::App;
use crate::definitions::SlideId;
use crate::direction::{ArrowGlyph, Step};

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Every binding resolves to one of the four deck operations (jump, step,
    /// toggle language) or to quitting.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => self.quit(),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => self.quit(),
            // Physical arrows follow what the user sees: the arrow pointing
            // the reading direction advances.
            (KeyCode::Left, _) => {
                let step = self.policy().step_for_arrow(ArrowGlyph::Left);
                self.step(step);
            }
            (KeyCode::Right, _) => {
                let step = self.policy().step_for_arrow(ArrowGlyph::Right);
                self.step(step);
            }
            (KeyCode::Down, _) | (KeyCode::PageDown, _) | (KeyCode::Char(' '), _) => {
                self.step(Step::Forward);
            }
            (KeyCode::Up, _) | (KeyCode::PageUp, _) | (KeyCode::Backspace, _) => {
                self.step(Step::Backward);
            }
            (KeyCode::Home, _) => {
                self.set_active_slide(SlideId::first());
            }
            (KeyCode::End, _) => {
                self.set_active_slide(SlideId::last());
            }
            (KeyCode::Char('l'), _) | (KeyCode::Char('L'), _) => {
                self.toggle_language();
            }
            (KeyCode::Char(ch), _) if ch.is_ascii_digit() => {
                let slide = ch
                    .to_digit(10)
                    .and_then(|n| (n as usize).checked_sub(1))
                    .and_then(SlideId::from_index);
                match slide {
                    Some(slide) => {
                        self.set_active_slide(slide);
                    }
                    None => debug!("no slide bound to '{ch}'"),
                }
            }
            _ => {}
        }
    }

    pub fn quit(&mut self) {
        debug!("quit requested");
        self.should_quit = true;
    }
}
