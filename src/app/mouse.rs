use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::debug;

use super::App;
use crate::definitions::{ControlKind, rect_contains};
use crate::direction::Step;

// Implementation block for mouse event handling in the App.
impl App {
    /// The main entry point for handling mouse events.
    ///
    /// Clicks are resolved against the regions recorded by the last render.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(event.column, event.row),
            MouseEventKind::ScrollDown => self.handle_scroll(event, Step::Forward),
            MouseEventKind::ScrollUp => self.handle_scroll(event, Step::Backward),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        // 1. Controls drawn over the content area.
        if let Some(control) = self.regions.hit_control(column, row) {
            debug!("click on {:?}", control);
            match control {
                ControlKind::LanguageToggle => {
                    self.toggle_language();
                }
                ControlKind::StepBackward => {
                    self.step(Step::Backward);
                }
                ControlKind::StepForward => {
                    self.step(Step::Forward);
                }
            }
            return;
        }
        // 2. Sidebar entries.
        if let Some(slide) = self.regions.hit_sidebar(column, row) {
            self.set_active_slide(slide);
        }
    }

    /// Scrolling over the sidebar walks through the slides.
    fn handle_scroll(&mut self, event: MouseEvent, step: Step) {
        if rect_contains(&self.regions.sidebar, event.column, event.row) {
            self.step(step);
        }
    }
}
