use crate::date;
use crate::record::{normalize, RawShiftRecord};
use crate::tests::raw_record;

#[test]
fn test_accepts_bare_and_time_suffixed_dates() {
    let records = [
        raw_record("なの", "2024-02-10", None),
        raw_record("さな", "2024-02-10T12:00:00+09:00", None),
        raw_record("しほ", "2024-02-10 12:00", None),
    ];

    let intervals = normalize(&records);
    assert_eq!(intervals.len(), 3);

    for interval in &intervals {
        assert_eq!(interval.start, date!("2024-02-10"));
        assert_eq!(interval.end, date!("2024-02-10"));
    }
}

#[test]
fn test_drops_record_without_staff_name() {
    let record = RawShiftRecord {
        staff: String::new(),
        start: Some("2024-02-10".to_string()),
        ..Default::default()
    };

    assert!(normalize(&[record]).is_empty());
}

#[test]
fn test_drops_record_without_start() {
    let missing = RawShiftRecord { staff: "なの".to_string(), ..Default::default() };

    let empty = RawShiftRecord {
        staff: "なの".to_string(),
        start: Some("   ".to_string()),
        ..Default::default()
    };

    assert!(normalize(&[missing, empty]).is_empty());
}

#[test]
fn test_drops_record_with_unparseable_start() {
    let records = [
        raw_record("なの", "2024/02/10", None),
        raw_record("さな", "not a date", None),
    ];

    assert!(normalize(&records).is_empty());
}

#[test]
fn test_invalid_records_do_not_affect_valid_ones() {
    let records = [
        raw_record("なの", "2024-02-10", None),
        raw_record("さな", "garbage", None),
        raw_record("しほ", "2024-02-12", None),
    ];

    let intervals = normalize(&records);
    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals[0].staff, "なの");
    assert_eq!(intervals[1].staff, "しほ");
}

#[test]
fn test_missing_end_falls_back_to_start() {
    let intervals = normalize(&[raw_record("なの", "2024-02-10", None)]);
    assert_eq!(intervals[0].end, intervals[0].start);
}

#[test]
fn test_unparseable_end_falls_back_to_start() {
    let intervals = normalize(&[raw_record("なの", "2024-02-10", Some("soon"))]);
    assert_eq!(intervals[0].end, date!("2024-02-10"));
}

#[test]
fn test_reversed_end_degenerates_to_single_day() {
    let intervals = normalize(&[raw_record("なの", "2024-02-10", Some("2024-02-01"))]);
    assert_eq!(intervals[0].start, date!("2024-02-10"));
    assert_eq!(intervals[0].end, date!("2024-02-10"));
}

#[test]
fn test_condition_and_room_carried_through() {
    let record = RawShiftRecord {
        staff: "なの".to_string(),
        start: Some("2024-02-10".to_string()),
        end: None,
        condition: "18:00-22:00".to_string(),
        room: "201".to_string(),
    };

    let intervals = normalize(&[record]);
    assert_eq!(intervals[0].condition, "18:00-22:00");
    assert_eq!(intervals[0].room, "201");
}
