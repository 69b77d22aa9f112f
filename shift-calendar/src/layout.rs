//! Grid geometry of the month view.
//!
//! All pixel constants are fixed so that two renders of the same month with
//! the same staff count always produce identically sized images; only the
//! row count and the legend band vary with the input.

use chrono::{Datelike, NaiveDate};

use crate::error::InvalidMonth;
use crate::utils::dates::count_days_in_month;

/// Width of one day cell, in pixels.
pub const CELL_WIDTH: u32 = 150;
/// Height of one day cell, in pixels.
pub const CELL_HEIGHT: u32 = 110;
/// Height of the title band at the top of the image.
pub const HEADER_HEIGHT: u32 = 80;
/// Height of the weekday label row below the title band.
pub const WEEKDAY_ROW_HEIGHT: u32 = 35;
/// Padding around the grid and the legend band.
pub const PADDING: u32 = 15;
/// Number of columns the legend arranges staff names in.
pub const LEGEND_COLUMNS: u32 = 5;

/// Pixel geometry of one month view, derived once per render.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CalendarGeometry {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of the 1st of the month, rebased so that Sunday is 0.
    pub first_weekday: u32,
    /// Number of week rows in the grid.
    pub rows: u32,
    /// Height of the legend band, a function of the distinct staff count.
    pub legend_height: u32,
    /// Overall image width, in pixels.
    pub width: u32,
    /// Overall image height, in pixels.
    pub height: u32,
}

impl CalendarGeometry {
    /// Grid position of a day of the month, as `(row, column)`.
    pub fn position(&self, day: u32) -> (u32, u32) {
        let cell_index = self.first_weekday + day - 1;
        (cell_index / 7, cell_index % 7)
    }

    /// Y coordinate of the top of the day-cell grid.
    pub fn grid_top(&self) -> u32 {
        HEADER_HEIGHT + WEEKDAY_ROW_HEIGHT
    }
}

/// Compute the grid geometry for a month and a distinct staff count.
///
/// ```
/// use shift_calendar::plan;
///
/// // February 2024 has 29 days and starts on a Thursday.
/// let geometry = plan(2024, 2, 3).unwrap();
/// assert_eq!(geometry.days_in_month, 29);
/// assert_eq!(geometry.first_weekday, 4);
/// assert_eq!(geometry.rows, 5);
///
/// assert!(plan(2024, 13, 0).is_err());
/// ```
pub fn plan(year: i32, month: u32, distinct_staff: usize) -> Result<CalendarGeometry, InvalidMonth> {
    let first_of_month =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(InvalidMonth { year, month })?;

    let days_in_month = count_days_in_month(first_of_month);
    let first_weekday = first_of_month.weekday().num_days_from_sunday();
    let rows = (first_weekday + days_in_month).div_ceil(7);

    let legend_rows = (distinct_staff as u32).div_ceil(LEGEND_COLUMNS);
    let legend_height = (30 + legend_rows * 28).max(60);

    Ok(CalendarGeometry {
        year,
        month,
        days_in_month,
        first_weekday,
        rows,
        legend_height,
        width: 7 * CELL_WIDTH + 2 * PADDING,
        height: HEADER_HEIGHT + WEEKDAY_ROW_HEIGHT + rows * CELL_HEIGHT + legend_height + 2 * PADDING,
    })
}
