//! The `app` module is the core of the deck.
//!
//! It owns the presentation state, handles user input (keyboard, mouse) and
//! the periodic tick, and exposes the four operations every control maps to.
//!
//! This `mod.rs` declares the submodules and re-exports the key types.

// --- Submodules ---

/// `init`: construction of the `App` from settings and translations.
mod init;
/// `keyboard`: maps key presses to deck operations.
mod keyboard;
/// `mouse`: resolves clicks against the regions of the last frame.
mod mouse;
/// `navigation`: the setters and step logic, the only mutation path.
mod navigation;
/// `state`: the `App` struct and the presentation state.
mod state;
/// `tick`: cosmetic animation state advanced on every tick.
mod tick;

pub use state::{App, PresentationState, SlideTransition};
