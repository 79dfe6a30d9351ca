use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(248, 250, 252);
pub const BG_PANEL: Color = Color::Rgb(255, 255, 255);
pub const FG_PRIMARY: Color = Color::Rgb(15, 23, 42);
pub const FG_BODY: Color = Color::Rgb(71, 85, 105);
pub const FG_DIM: Color = Color::Rgb(148, 163, 184);
pub const BORDER_IDLE: Color = Color::Rgb(226, 232, 240);

pub const ACCENT: Color = Color::Rgb(79, 70, 229);
pub const ACCENT_SOFT_BG: Color = Color::Rgb(238, 242, 255);
pub const ACCENT_TEXT: Color = Color::Rgb(255, 255, 255);
pub const ACCENT_STRONG_BG: Color = Color::Rgb(99, 102, 241);

pub const SERIES_AI: Color = Color::Rgb(99, 102, 241);
pub const SERIES_TECH: Color = Color::Rgb(16, 185, 129);
pub const SERIES_MANUAL: Color = Color::Rgb(148, 163, 184);

/// Icon colours for the intro stats, cycled by position.
pub const STAT_COLORS: [Color; 4] = [
    Color::Rgb(16, 185, 129),
    Color::Rgb(59, 130, 246),
    Color::Rgb(245, 158, 11),
    Color::Rgb(168, 85, 247),
];
