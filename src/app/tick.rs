use std::time::Instant;

use super::App;
use crate::definitions::SlideId;

impl App {
    /// Called on every tick of the event loop. Only cosmetic state moves here.
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if self
            .transition
            .is_some_and(|transition| transition.is_finished(now))
        {
            self.transition = None;
        }

        if matches!(
            self.active_slide(),
            SlideId::Challenges | SlideId::Collaboration
        ) {
            self.marquee_offset = self
                .marquee_offset
                .wrapping_add(self.settings.marquee_step);
        }
    }
}
