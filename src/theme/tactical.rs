use super::palette::Palette;
use ratatui::style::Color;

// Neon-on-black, after the Operation Center's web styling.
pub const TACTICAL: Palette = Palette {
    base: Color::Rgb(0, 0, 0),
    mantle: Color::Rgb(10, 14, 12),
    crust: Color::Rgb(0, 0, 0),
    text: Color::Rgb(226, 232, 240),
    subtext0: Color::Rgb(148, 163, 184),
    subtext1: Color::Rgb(203, 213, 225),
    surface0: Color::Rgb(30, 41, 59),
    surface1: Color::Rgb(15, 23, 42),
    surface2: Color::Rgb(51, 65, 85),
    overlay0: Color::Rgb(148, 163, 184),
    accent: Color::Rgb(57, 255, 20),
    blue: Color::Rgb(59, 130, 246),
    sky: Color::Rgb(14, 165, 233),
    green: Color::Rgb(74, 222, 128),
    emerald: Color::Rgb(16, 185, 129),
    amber: Color::Rgb(245, 158, 11),
    red: Color::Rgb(239, 68, 68),
    mauve: Color::Rgb(168, 85, 247),
    ocean: Color::Rgb(8, 30, 48),
};
