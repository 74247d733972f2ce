//! Contribution calendar data model

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Slots per week column (Sunday through Saturday)
pub const DAYS_PER_WEEK: usize = 7;

/// A single dated activity count, as reported by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ContributionDay {
    /// Display intensity bucket for this day's count
    pub fn level(&self) -> Level {
        Level::for_count(self.count)
    }

    /// Weekday slot index, Sunday = 0 … Saturday = 6
    pub fn slot(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }

    /// Tooltip text, e.g. "2025-03-01: 2 contributions".
    /// Singular only for exactly one contribution; zero is plural.
    pub fn tooltip(&self) -> String {
        let noun = if self.count == 1 {
            "contribution"
        } else {
            "contributions"
        };
        format!("{}: {} {}", self.date, self.count, noun)
    }
}

/// One of 5 ordered display intensities, empty through most intense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl Level {
    /// Bucket a daily count. Fixed thresholds: 0, 1-3, 4-6, 7-10, 11+.
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1..=3 => Self::Low,
            4..=6 => Self::Medium,
            7..=10 => Self::High,
            _ => Self::Max,
        }
    }

    /// Position in the 5-entry palette (0 = empty, 4 = most intense)
    pub fn index(self) -> usize {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Max => 4,
        }
    }

    /// All levels in palette order
    pub fn all() -> [Level; 5] {
        [Self::None, Self::Low, Self::Medium, Self::High, Self::Max]
    }
}

/// One Sunday-through-Saturday column of the grid. Empty slots are days
/// outside the fetched range (before `from` or after today).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Week {
    pub days: [Option<ContributionDay>; DAYS_PER_WEEK],
}

impl Week {
    /// Place a day into its weekday slot
    pub fn place(&mut self, day: ContributionDay) {
        self.days[day.slot()] = Some(day);
    }

    /// Day at a weekday slot, if present
    pub fn day(&self, weekday: usize) -> Option<&ContributionDay> {
        self.days.get(weekday).and_then(|slot| slot.as_ref())
    }
}

/// Chronological weeks covering the fetched range
pub type CalendarGrid = Vec<Week>;

/// Anchor for a month heading above the grid: the first week column whose
/// Sunday falls in that month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLabel {
    /// Calendar month, 0 = January
    pub month: u32,
    /// 0-based week column
    pub week_index: usize,
}

/// Render-ready grid: fetched weeks plus derived month anchors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridViewModel {
    pub weeks: CalendarGrid,
    pub month_labels: Vec<MonthLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32, count: u32) -> ContributionDay {
        ContributionDay {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            count,
        }
    }

    // ========== Level tests ==========

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::for_count(0), Level::None);
        assert_eq!(Level::for_count(1), Level::Low);
        assert_eq!(Level::for_count(3), Level::Low);
        assert_eq!(Level::for_count(4), Level::Medium);
        assert_eq!(Level::for_count(6), Level::Medium);
        assert_eq!(Level::for_count(7), Level::High);
        assert_eq!(Level::for_count(10), Level::High);
        assert_eq!(Level::for_count(11), Level::Max);
        assert_eq!(Level::for_count(9999), Level::Max);
    }

    #[test]
    fn test_level_monotonic_in_count() {
        let mut prev = Level::for_count(0);
        for count in 1..=100 {
            let level = Level::for_count(count);
            assert!(level >= prev, "bucket regressed at count {}", count);
            prev = level;
        }
    }

    #[test]
    fn test_level_index_order() {
        let indices: Vec<usize> = Level::all().iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    // ========== Tooltip tests ==========

    #[test]
    fn test_tooltip_singular() {
        assert_eq!(day(2025, 3, 1, 1).tooltip(), "2025-03-01: 1 contribution");
    }

    #[test]
    fn test_tooltip_zero_is_plural() {
        assert_eq!(day(2025, 3, 1, 0).tooltip(), "2025-03-01: 0 contributions");
    }

    #[test]
    fn test_tooltip_plural() {
        assert_eq!(day(2025, 3, 1, 5).tooltip(), "2025-03-01: 5 contributions");
    }

    // ========== Week tests ==========

    #[test]
    fn test_week_place_aligns_by_weekday() {
        // 2025-01-01 is a Wednesday -> slot 3
        let mut week = Week::default();
        week.place(day(2025, 1, 1, 2));

        assert!(week.day(0).is_none());
        assert!(week.day(1).is_none());
        assert!(week.day(2).is_none());
        assert_eq!(week.day(3).unwrap().count, 2);
        assert!(week.day(4).is_none());
    }

    #[test]
    fn test_week_sunday_is_slot_zero() {
        // 2025-01-05 is a Sunday
        let mut week = Week::default();
        week.place(day(2025, 1, 5, 1));
        assert_eq!(
            week.day(0).unwrap().date,
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_week_out_of_range_slot_is_none() {
        let week = Week::default();
        assert!(week.day(7).is_none());
    }

    #[test]
    fn test_month_label_serializes_camel_case() {
        let label = MonthLabel {
            month: 1,
            week_index: 4,
        };
        let json = serde_json::to_value(label).unwrap();
        assert_eq!(json["month"], 1);
        assert_eq!(json["weekIndex"], 4);
    }
}
