use crossterm::event::{KeyEvent, MouseEvent};

/// Events driving the deck loop.
#[derive(Debug)]
pub enum Event {
    /// Animation tick.
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// The terminal was resized; regions are recomputed on the next draw.
    Resize(u16, u16),
}
