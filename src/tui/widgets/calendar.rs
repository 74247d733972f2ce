//! Contribution calendar grid widget
//!
//! One column per week, one row per weekday (Sun-Sat), month labels
//! above the grid at their anchor column. Empty slots keep their cell
//! blank at identical layout size.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::tui::theme::Theme;
use crate::types::{GridViewModel, DAYS_PER_WEEK};

/// Week column width (2 block chars + 1 gap)
pub const CELL_WIDTH: u16 = 3;
/// Weekday label gutter ("Sun ")
pub const LABEL_WIDTH: u16 = 4;
/// Rendered height: month-label row + 7 weekday rows
pub const GRID_HEIGHT: u16 = 8;

/// All days Sunday through Saturday
const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Week×weekday contribution grid with month labels and a day cursor
pub struct CalendarView<'a> {
    model: &'a GridViewModel,
    cursor: Option<(usize, usize)>,
    theme: Theme,
}

impl<'a> CalendarView<'a> {
    pub fn new(model: &'a GridViewModel, theme: Theme) -> Self {
        Self {
            model,
            cursor: None,
            theme,
        }
    }

    /// Highlight the day at (week index, weekday index)
    pub fn with_cursor(mut self, cursor: (usize, usize)) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Week columns that fit in `width`, capped at the model's weeks.
    /// When the terminal is narrower than the full year, the most
    /// recent weeks win.
    pub fn visible_weeks(&self, width: u16) -> usize {
        let available = width.saturating_sub(LABEL_WIDTH);
        ((available / CELL_WIDTH) as usize).min(self.model.weeks.len())
    }

    /// Rendered width for a number of week columns
    pub fn width_for(weeks: usize) -> u16 {
        LABEL_WIDTH + weeks as u16 * CELL_WIDTH
    }
}

impl Widget for CalendarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < GRID_HEIGHT || area.width < LABEL_WIDTH + CELL_WIDTH {
            return;
        }

        let visible = self.visible_weeks(area.width);
        if visible == 0 {
            return;
        }
        let skip = self.model.weeks.len() - visible;

        let x_offset = area.width.saturating_sub(Self::width_for(visible)) / 2;
        let origin_x = area.x + x_offset + LABEL_WIDTH;
        let max_x = area.x + area.width;
        let label_style = Style::default().fg(self.theme.muted());

        // Month labels, anchored at their week column with the same
        // horizontal spacing as the day grid
        for label in &self.model.month_labels {
            if label.week_index < skip {
                continue;
            }
            let x = origin_x + (label.week_index - skip) as u16 * CELL_WIDTH;
            if x + CELL_WIDTH > max_x {
                break;
            }
            buf.set_string(x, area.y, MONTH_NAMES[label.month as usize], label_style);
        }

        // One row per weekday, one column per week
        for (weekday, name) in WEEKDAYS.iter().enumerate() {
            let y = area.y + 1 + weekday as u16;
            buf.set_string(area.x + x_offset, y, name, label_style);

            for (col, week) in self.model.weeks.iter().skip(skip).enumerate() {
                // An absent day keeps its blank cell: same layout size,
                // no color, no tooltip
                let Some(day) = week.day(weekday) else {
                    continue;
                };
                let x = origin_x + col as u16 * CELL_WIDTH;
                if x + CELL_WIDTH > max_x {
                    break;
                }

                let mut style = Style::default().fg(self.theme.level_color(day.level()));
                if self.cursor == Some((skip + col, weekday)) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                buf.set_string(x, y, "██", style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::grid::build_view_model;
    use crate::types::{ContributionDay, Week};
    use chrono::{Duration, NaiveDate};
    use ratatui::style::Color;

    /// Full weeks of days starting at the Sunday 2025-01-05, with a
    /// fixed count everywhere
    fn model_weeks(count_per_day: u32, weeks: usize) -> GridViewModel {
        let start = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let grid: Vec<Week> = (0..weeks)
            .map(|w| {
                let mut week = Week::default();
                for d in 0..7 {
                    week.place(ContributionDay {
                        date: start + Duration::days((w * 7 + d) as i64),
                        count: count_per_day,
                    });
                }
                week
            })
            .collect();
        build_view_model(grid)
    }

    fn render(view: CalendarView, width: u16, height: u16) -> (Buffer, u16) {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        (buf, width)
    }

    fn row_text(buf: &Buffer, width: u16, y: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    // ========== layout math ==========

    #[test]
    fn test_width_for() {
        assert_eq!(CalendarView::width_for(1), LABEL_WIDTH + CELL_WIDTH);
        assert_eq!(CalendarView::width_for(52), LABEL_WIDTH + 52 * CELL_WIDTH);
    }

    #[test]
    fn test_visible_weeks_caps_at_model() {
        let model = model_weeks(0, 4);
        let view = CalendarView::new(&model, Theme::Dark);
        assert_eq!(view.visible_weeks(200), 4);
    }

    #[test]
    fn test_visible_weeks_narrow_terminal() {
        let model = model_weeks(0, 52);
        let view = CalendarView::new(&model, Theme::Dark);
        // 40 cols: (40 - 4) / 3 = 12 week columns
        assert_eq!(view.visible_weeks(40), 12);
    }

    // ========== rendering ==========

    #[test]
    fn test_renders_all_weekday_labels() {
        let model = model_weeks(1, 4);
        let (buf, width) = render(
            CalendarView::new(&model, Theme::Dark),
            CalendarView::width_for(4),
            GRID_HEIGHT,
        );

        for (weekday, name) in WEEKDAYS.iter().enumerate() {
            assert!(
                row_text(&buf, width, 1 + weekday as u16).starts_with(name),
                "missing weekday label {}",
                name
            );
        }
    }

    #[test]
    fn test_month_label_at_week_column_offset() {
        // Weeks start 2025-01-05: Jan anchors week 0, Feb week 4
        let model = model_weeks(1, 6);
        let (buf, width) = render(
            CalendarView::new(&model, Theme::Dark),
            CalendarView::width_for(6),
            GRID_HEIGHT,
        );

        let months = row_text(&buf, width, 0);
        let jan = months.find("Jan").unwrap() as u16;
        let feb = months.find("Feb").unwrap() as u16;
        assert_eq!(jan, LABEL_WIDTH);
        assert_eq!(feb, LABEL_WIDTH + 4 * CELL_WIDTH);
    }

    #[test]
    fn test_occupied_cell_renders_level_color() {
        let model = model_weeks(5, 1); // count 5 -> Medium
        let (buf, _) = render(
            CalendarView::new(&model, Theme::Dark),
            CalendarView::width_for(1),
            GRID_HEIGHT,
        );

        let cell = buf.cell((LABEL_WIDTH, 1)).unwrap();
        assert_eq!(cell.symbol(), "█");
        assert_eq!(cell.style().fg, Some(Color::Rgb(0x40, 0xc4, 0x63)));
    }

    #[test]
    fn test_empty_slot_stays_blank() {
        // Single week with only a Wednesday: Sunday slot is empty
        let mut week = Week::default();
        week.place(ContributionDay {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            count: 3,
        });
        let model = build_view_model(vec![week]);
        let (buf, _) = render(
            CalendarView::new(&model, Theme::Dark),
            CalendarView::width_for(1),
            GRID_HEIGHT,
        );

        // Sunday row cell blank, Wednesday row cell drawn
        assert_eq!(buf.cell((LABEL_WIDTH, 1)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((LABEL_WIDTH, 4)).unwrap().symbol(), "█");
    }

    #[test]
    fn test_cursor_cell_is_reversed() {
        let model = model_weeks(1, 2);
        let (buf, _) = render(
            CalendarView::new(&model, Theme::Dark).with_cursor((1, 2)),
            CalendarView::width_for(2),
            GRID_HEIGHT,
        );

        let plain = buf.cell((LABEL_WIDTH, 3)).unwrap();
        let selected = buf.cell((LABEL_WIDTH + CELL_WIDTH, 3)).unwrap();
        assert!(!plain.style().add_modifier.contains(Modifier::REVERSED));
        assert!(selected.style().add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_narrow_terminal_shows_most_recent_weeks() {
        // 6 weeks, room for 2: weeks 4 and 5 render; January's label
        // (week 0) is scrolled out
        let model = model_weeks(1, 6);
        let (buf, width) = render(
            CalendarView::new(&model, Theme::Dark),
            CalendarView::width_for(2),
            GRID_HEIGHT,
        );

        let months = row_text(&buf, width, 0);
        assert!(!months.contains("Jan"));
        // Feb anchors week 4 -> first visible column
        assert_eq!(months.find("Feb").unwrap() as u16, LABEL_WIDTH);
    }

    #[test]
    fn test_too_small_area_renders_nothing() {
        let model = model_weeks(1, 4);
        let (buf, width) = render(CalendarView::new(&model, Theme::Dark), 5, 3);
        for y in 0..3 {
            assert_eq!(row_text(&buf, width, y).trim(), "");
        }
    }
}
