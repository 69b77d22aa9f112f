//! Expansion of shift intervals into a day-indexed roster for one month.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::record::ShiftInterval;

/// Ceiling on the span of a single shift interval, in days.
///
/// Anything longer can only come from corrupt data and is dropped instead of
/// being walked day by day.
pub const PATHOLOGICAL_SPAN_DAYS: i64 = 3_000;

/// One staff member's assignment on one calendar day.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct RosterEntry {
    pub staff: String,
    pub condition: String,
}

/// All assignments of one month, indexed by day of month (1-based).
///
/// Entries of a day keep the order the intervals were supplied in, and the
/// same staff member may legitimately appear twice on one day when two of
/// their intervals overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayRoster {
    days: BTreeMap<u32, Vec<RosterEntry>>,
}

impl DayRoster {
    /// Entries assigned to a day of the month, in insertion order.
    pub fn entries(&self, day: u32) -> &[RosterEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over the days that have at least one entry, in order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.keys().copied()
    }

    /// Total number of entries over the whole month.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Check if no day of the month has any assignment.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Distinct staff names appearing anywhere in the roster, sorted
    /// lexicographically. This is the legend order and the color assignment
    /// input.
    pub fn staff_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = (self.days.values())
            .flatten()
            .map(|entry| entry.staff.as_str())
            .collect();

        names.sort_unstable();
        names.dedup();
        names
    }

    fn push(&mut self, day: u32, entry: RosterEntry) {
        self.days.entry(day).or_default().push(entry);
    }
}

/// Expand shift intervals into the roster of a single month.
///
/// Every day of an interval that falls inside `year`/`month` receives one
/// entry; days outside the month are silently skipped, so intervals spanning
/// a month boundary only contribute their overlapping part.
///
/// ```
/// use chrono::NaiveDate;
/// use shift_calendar::{expand, ShiftInterval};
///
/// let interval = ShiftInterval {
///     staff: "Alice".to_string(),
///     start: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
///     condition: String::new(),
///     room: String::new(),
/// };
///
/// let roster = expand(std::slice::from_ref(&interval), 2024, 2);
/// assert_eq!(roster.days().collect::<Vec<_>>(), (10..=29).collect::<Vec<_>>());
/// ```
pub fn expand(intervals: &[ShiftInterval], year: i32, month: u32) -> DayRoster {
    let mut roster = DayRoster::default();

    for interval in intervals {
        let span = (interval.end - interval.start).num_days();

        if span > PATHOLOGICAL_SPAN_DAYS {
            let staff = &interval.staff;
            log::warn!("dropping {span}-day shift interval for {staff}: exceeds sane range");
            continue;
        }

        let mut current = interval.start;

        while current <= interval.end {
            if current.year() == year && current.month() == month {
                roster.push(
                    current.day(),
                    RosterEntry {
                        staff: interval.staff.clone(),
                        condition: interval.condition.clone(),
                    },
                );
            }

            let Some(next) = current.succ_opt() else {
                break;
            };

            current = next;
        }
    }

    roster
}

/// Split a day's entries at the display cutoff, as `(shown, overflow count)`.
pub(crate) fn apply_cutoff(entries: &[RosterEntry], max_shown: usize) -> (&[RosterEntry], usize) {
    let shown = &entries[..entries.len().min(max_shown)];
    (shown, entries.len() - shown.len())
}
