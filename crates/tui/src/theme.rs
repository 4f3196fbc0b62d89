use folio_protocol::{Theme, ThemeToken};
use ratatui::style::Color;

pub fn resolve(token: ThemeToken, theme: Theme) -> Color {
    match theme {
        Theme::Dark => resolve_dark(token),
        Theme::Light => resolve_light(token),
    }
}

fn resolve_dark(token: ThemeToken) -> Color {
    // Catppuccin Mocha palette
    use ThemeToken::*;
    match token {
        Background => Color::Rgb(0x11, 0x11, 0x1b),      // Crust
        Foreground => Color::Rgb(0xcd, 0xd6, 0xf4),      // Text
        Muted => Color::Rgb(0xa6, 0xad, 0xc8),           // Subtext0
        MutedBackground => Color::Rgb(0x18, 0x18, 0x25), // Mantle

        Accent => Color::Rgb(0x89, 0xb4, 0xfa), // Blue
        AccentForeground => Color::Rgb(0x1e, 0x1e, 0x2e),

        Border => Color::Rgb(0x31, 0x32, 0x44), // Surface0

        NavText => Color::Rgb(0xba, 0xc2, 0xde), // Subtext1
        NavActive => Color::Rgb(0x89, 0xb4, 0xfa),

        Badge => Color::Rgb(0xcb, 0xa6, 0xf7), // Mauve
        Link => Color::Rgb(0x74, 0xc7, 0xec),  // Sapphire
    }
}

fn resolve_light(token: ThemeToken) -> Color {
    use ThemeToken::*;
    match token {
        Background => Color::Rgb(255, 255, 255),
        Foreground => Color::Rgb(20, 20, 30),
        Muted => Color::Rgb(100, 100, 110),
        MutedBackground => Color::Rgb(244, 244, 247),

        Accent => Color::Rgb(37, 99, 235),
        AccentForeground => Color::Rgb(255, 255, 255),

        Border => Color::Rgb(210, 210, 220),

        NavText => Color::Rgb(80, 80, 100),
        NavActive => Color::Rgb(37, 99, 235),

        Badge => Color::Rgb(120, 60, 190),
        Link => Color::Rgb(50, 110, 220),
    }
}
