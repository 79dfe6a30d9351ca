pub mod app;
pub mod bidi;
pub mod config;
pub mod definitions;
pub mod direction;
pub mod event;
pub mod i18n;
pub mod logging;
pub mod tui;
pub mod ui;
pub mod view;
