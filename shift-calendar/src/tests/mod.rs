mod expand;
mod layout;
mod normalize;

use crate::record::RawShiftRecord;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// A well-formed raw record, the starting point of most test fixtures.
fn raw_record(staff: &str, start: &str, end: Option<&str>) -> RawShiftRecord {
    RawShiftRecord {
        staff: staff.to_string(),
        start: Some(start.to_string()),
        end: end.map(str::to_string),
        condition: "12:00-20:00".to_string(),
        room: String::new(),
    }
}
