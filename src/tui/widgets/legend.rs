//! Less→More intensity legend

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::tui::theme::Theme;
use crate::types::Level;

const LESS: &str = "Less ";
const MORE: &str = "More";
/// Legend swatch width matches the grid's week columns
const SWATCH_WIDTH: u16 = 3;

/// One-line legend of the 5 level colors
pub struct Legend {
    theme: Theme,
}

impl Legend {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Rendered width: "Less " + 5 swatches + "More"
    pub fn width() -> u16 {
        LESS.len() as u16 + 5 * SWATCH_WIDTH + MORE.len() as u16
    }
}

impl Widget for Legend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < Self::width() {
            return;
        }

        let muted = Style::default().fg(self.theme.muted());
        let mut x = area.x;

        buf.set_string(x, area.y, LESS, muted);
        x += LESS.len() as u16;

        for level in Level::all() {
            let style = Style::default().fg(self.theme.level_color(level));
            buf.set_string(x, area.y, "██", style);
            x += SWATCH_WIDTH;
        }

        buf.set_string(x, area.y, MORE, muted);
    }
}
