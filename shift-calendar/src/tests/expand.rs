use crate::date;
use crate::record::ShiftInterval;
use crate::roster::expand;

fn interval(staff: &str, start: &str, end: &str) -> ShiftInterval {
    ShiftInterval {
        staff: staff.to_string(),
        start: date!(start),
        end: date!(end),
        condition: String::new(),
        room: String::new(),
    }
}

#[test]
fn test_single_day_interval_lands_on_one_day() {
    let roster = expand(&[interval("なの", "2024-02-10", "2024-02-10")], 2024, 2);

    assert_eq!(roster.days().collect::<Vec<_>>(), [10]);
    assert_eq!(roster.entries(10).len(), 1);
    assert_eq!(roster.entries(10)[0].staff, "なの");
}

#[test]
fn test_contained_interval_covers_every_day_of_its_span() {
    let roster = expand(&[interval("なの", "2024-02-05", "2024-02-09")], 2024, 2);

    assert_eq!(roster.days().count(), 5);
    assert_eq!(roster.days().collect::<Vec<_>>(), [5, 6, 7, 8, 9]);
}

#[test]
fn test_partial_overlap_only_contributes_inside_days() {
    // Spans January 30 to February 2: only the February part lands.
    let roster = expand(&[interval("なの", "2024-01-30", "2024-02-02")], 2024, 2);
    assert_eq!(roster.days().collect::<Vec<_>>(), [1, 2]);

    // The same interval seen from January only contributes its own days.
    let roster = expand(&[interval("なの", "2024-01-30", "2024-02-02")], 2024, 1);
    assert_eq!(roster.days().collect::<Vec<_>>(), [30, 31]);
}

#[test]
fn test_interval_outside_month_contributes_nothing() {
    let roster = expand(&[interval("なの", "2024-03-01", "2024-03-05")], 2024, 2);
    assert!(roster.is_empty());
}

#[test]
fn test_entries_keep_supply_order_without_deduplication() {
    let intervals = [
        interval("さな", "2024-02-10", "2024-02-10"),
        interval("なの", "2024-02-10", "2024-02-10"),
        // overlapping second interval for the same staff member
        interval("さな", "2024-02-09", "2024-02-11"),
    ];

    let roster = expand(&intervals, 2024, 2);
    let names: Vec<_> = (roster.entries(10).iter())
        .map(|entry| entry.staff.as_str())
        .collect();

    assert_eq!(names, ["さな", "なの", "さな"]);
}

#[test]
fn test_pathological_interval_is_dropped() {
    let roster = expand(&[interval("なの", "2014-01-01", "2024-02-10")], 2024, 2);
    assert!(roster.is_empty());
}

#[test]
fn test_long_but_sane_interval_is_expanded() {
    // A full-month block: ordinary long-range data, not corruption.
    let roster = expand(&[interval("なの", "2024-02-01", "2024-02-29")], 2024, 2);
    assert_eq!(roster.days().count(), 29);
}

#[test]
fn test_staff_names_sorted_and_distinct() {
    let intervals = [
        interval("b", "2024-02-10", "2024-02-12"),
        interval("a", "2024-02-11", "2024-02-11"),
        interval("b", "2024-02-20", "2024-02-20"),
    ];

    let roster = expand(&intervals, 2024, 2);
    assert_eq!(roster.staff_names(), ["a", "b"]);
    assert_eq!(roster.len(), 5);
}
