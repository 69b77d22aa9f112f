//! The end-to-end pipeline: raw records in, bitmap out.

use chrono::NaiveDate;
use image::RgbImage;

use staff_palette::StaffColors;

use crate::context::CalendarOptions;
use crate::error::InvalidMonth;
use crate::layout::plan;
use crate::record::{normalize, RawShiftRecord};
use crate::render::{render, FontSet};
use crate::roster::expand;

/// Build the shift calendar of a month from raw datastore records.
///
/// Runs normalize → expand → plan → render synchronously, with no state
/// shared across calls. Returns `Ok(None)` when the month ends up with no
/// assignment at all — zero records, only malformed records, or no interval
/// day inside the month — so the caller can send a "no data" notice instead
/// of a blank calendar.
///
/// ```
/// use chrono::NaiveDate;
/// use shift_calendar::{month_calendar, CalendarOptions};
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
/// let rendered = month_calendar(&[], 2025, 1, today, &CalendarOptions::default());
/// assert!(matches!(rendered, Ok(None)));
/// ```
pub fn month_calendar(
    records: &[RawShiftRecord],
    year: i32,
    month: u32,
    today: NaiveDate,
    options: &CalendarOptions,
) -> Result<Option<RgbImage>, InvalidMonth> {
    let intervals = normalize(records);
    let roster = expand(&intervals, year, month);

    if roster.is_empty() {
        log::info!("no shift data for {year:04}-{month:02}");
        return Ok(None);
    }

    let staff = roster.staff_names();
    let geometry = plan(year, month, staff.len())?;
    let colors = StaffColors::assign(staff);
    let fonts = FontSet::load();

    Ok(Some(render(&geometry, &roster, &colors, today, options, &fonts)))
}
