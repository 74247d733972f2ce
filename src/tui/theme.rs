//! Terminal theme detection and color definitions

use crate::types::Level;
use ratatui::style::Color;

/// Contribution palette for dark terminals, empty through most intense.
/// Dark grey for empty, GitHub greens above.
const PALETTE_DARK: [Color; 5] = [
    Color::Rgb(0x4a, 0x4a, 0x4a),
    Color::Rgb(0x9b, 0xe9, 0xa8),
    Color::Rgb(0x40, 0xc4, 0x63),
    Color::Rgb(0x30, 0xa1, 0x4e),
    Color::Rgb(0x21, 0x6e, 0x39),
];

/// GitHub's light-mode palette for light terminals
const PALETTE_LIGHT: [Color; 5] = [
    Color::Rgb(0xeb, 0xed, 0xf0),
    Color::Rgb(0x9b, 0xe9, 0xa8),
    Color::Rgb(0x40, 0xc4, 0x63),
    Color::Rgb(0x30, 0xa1, 0x4e),
    Color::Rgb(0x21, 0x6e, 0x39),
];

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Primary text color (tooltip line)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Secondary/muted text (weekday and month labels, key hints)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Error text color
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Cell color for a contribution level
    pub fn level_color(self, level: Level) -> Color {
        match self {
            Self::Dark => PALETTE_DARK[level.index()],
            Self::Light => PALETTE_LIGHT[level.index()],
        }
    }
}
