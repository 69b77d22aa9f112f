//! Normalization of raw datastore rows into typed shift intervals.
//!
//! The datastore is free to deliver anything: empty titles, missing dates,
//! dates with or without a time-of-day suffix. Everything that cannot be
//! turned into a [`ShiftInterval`] is dropped here, so nothing stringly-typed
//! leaks past this module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A shift row as delivered by the datastore, before any validation.
///
/// Field contents mirror what the upstream page properties expose: the first
/// text value of the title property, the raw `start`/`end` values of the date
/// property and the free-text condition and room labels.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RawShiftRecord {
    #[serde(default)]
    pub staff: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub room: String,
}

/// One staff member's assignment over a contiguous range of days.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ShiftInterval {
    pub staff: String,
    pub start: NaiveDate,
    /// Last day of the assignment, inclusive. Never before `start`.
    pub end: NaiveDate,
    /// Free-text time band, e.g. `12:00-20:00`. May be empty.
    pub condition: String,
    /// Free-text room label. May be empty.
    pub room: String,
}

/// Turn a batch of raw records into the subset of valid shift intervals.
///
/// Malformed records are dropped, never reported as errors: a half-broken
/// datastore page must not take the whole calendar down.
///
/// ```
/// use shift_calendar::{normalize, RawShiftRecord};
///
/// let records = vec![
///     RawShiftRecord {
///         staff: "なの".to_string(),
///         start: Some("2024-02-10T12:00:00+09:00".to_string()),
///         ..Default::default()
///     },
///     RawShiftRecord { staff: "さな".to_string(), ..Default::default() },
/// ];
///
/// // The second record has no start date and is dropped.
/// assert_eq!(normalize(&records).len(), 1);
/// ```
pub fn normalize(records: &[RawShiftRecord]) -> Vec<ShiftInterval> {
    records.iter().filter_map(normalize_record).collect()
}

fn normalize_record(record: &RawShiftRecord) -> Option<ShiftInterval> {
    if record.staff.is_empty() {
        log::debug!("dropping shift record with an empty staff name");
        return None;
    }

    let raw_start = record
        .start
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());

    let Some(raw_start) = raw_start else {
        let staff = &record.staff;
        log::debug!("dropping shift record for {staff}: no start date");
        return None;
    };

    let Some(start) = parse_iso_date(raw_start) else {
        let staff = &record.staff;
        log::debug!("dropping shift record for {staff}: unparseable start date {raw_start:?}");
        return None;
    };

    // A broken or reversed end degenerates to a single day.
    let end = (record.end.as_deref())
        .and_then(parse_iso_date)
        .map_or(start, |end| end.max(start));

    Some(ShiftInterval {
        staff: record.staff.clone(),
        start,
        end,
        condition: record.condition.clone(),
        room: record.room.clone(),
    })
}

/// Parse the date portion of an ISO-8601 value, ignoring any time-of-day or
/// offset suffix (`2024-02-10`, `2024-02-10T12:00:00+09:00`, ...).
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
