use chrono::NaiveDate;

use crate::domain::task_record::TaskRecord;

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a record from timestamp strings, panicking on malformed input so
/// test fixtures stay terse.
pub fn record(activation: &str, closure: &str) -> TaskRecord {
    TaskRecord::new(
        TaskRecord::parse_timestamp(activation).unwrap(),
        TaskRecord::parse_timestamp(closure).unwrap(),
    )
}
