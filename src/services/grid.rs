//! Contribution grid builder
//!
//! Pure derivation of the render-ready view model from a fetched
//! calendar, plus the trailing-year window computation that drives the
//! single fetch.

use crate::services::github::CalendarSource;
use crate::types::{CalendarGrid, GhcalError, GridViewModel, MonthLabel, Result, Week};
use chrono::{DateTime, Datelike, Months, Utc, Weekday};

/// Trailing-year query window ending at `to`: same month and day of the
/// prior year. Chrono month arithmetic clamps Feb 29 to Feb 28.
pub fn year_window(to: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (to - Months::new(12), to)
}

/// Sunday-anchored month labels, in week order, first occurrence per
/// month. Only a Sunday starts a label: a month whose visible days all
/// fall in a Sunday-less week (possible only at the partial first week)
/// stays unlabeled until its next Sunday, if any.
pub fn month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels: Vec<MonthLabel> = Vec::new();
    for (week_index, week) in weeks.iter().enumerate() {
        for day in week.days.iter().flatten() {
            if day.date.weekday() != Weekday::Sun {
                continue;
            }
            let month = day.date.month0();
            if !labels.iter().any(|label| label.month == month) {
                labels.push(MonthLabel { month, week_index });
            }
        }
    }
    labels
}

/// Derive the render-ready model from a fetched grid. Pure: rebuilding
/// from the same grid yields the same model.
pub fn build_view_model(weeks: CalendarGrid) -> GridViewModel {
    let month_labels = month_labels(&weeks);
    GridViewModel {
        weeks,
        month_labels,
    }
}

/// Builds render-ready contribution grids from a calendar source
pub struct GridBuilder<S> {
    source: S,
}

impl<S: CalendarSource> GridBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the trailing year for `username` and derive the view model.
    /// One query per call; errors from the source pass through untouched.
    pub fn fetch_and_build(&self, username: &str) -> Result<GridViewModel> {
        if username.is_empty() {
            return Err(GhcalError::Config("username must not be empty".into()));
        }
        let (from, to) = year_window(Utc::now());
        let weeks = self.source.query(username, from, to)?;
        Ok(build_view_model(weeks))
    }
}
