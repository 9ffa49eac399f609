use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::task_record::TaskRecord;

#[derive(Error, Debug)]
pub enum RecordsYamlError {
    #[error("failed to parse records yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid timestamp: {0} (expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp(String),
}

#[derive(Serialize, Deserialize)]
struct TaskRecordEntry {
    activation: String,
    closure: String,
}

pub fn deserialize_records_from_yaml_str(yaml: &str) -> Result<Vec<TaskRecord>, RecordsYamlError> {
    let entries: Vec<TaskRecordEntry> = serde_yaml::from_str(yaml)?;
    entries
        .iter()
        .map(|entry| {
            let activation = parse_timestamp(&entry.activation)?;
            let closure = parse_timestamp(&entry.closure)?;
            Ok(TaskRecord::new(activation, closure))
        })
        .collect()
}

pub fn serialize_records_to_yaml<W: Write>(
    writer: &mut W,
    records: &[TaskRecord],
) -> io::Result<()> {
    let entries: Vec<TaskRecordEntry> = records
        .iter()
        .map(|record| TaskRecordEntry {
            activation: format_timestamp(record.activation),
            closure: format_timestamp(record.closure),
        })
        .collect();

    let yaml = serde_yaml::to_string(&entries).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn parse_timestamp(value: &str) -> Result<chrono::NaiveDateTime, RecordsYamlError> {
    TaskRecord::parse_timestamp(value)
        .ok_or_else(|| RecordsYamlError::InvalidTimestamp(value.to_string()))
}

/// Midnight timestamps serialize as plain dates to keep hand-edited files
/// readable; anything else keeps its time of day.
fn format_timestamp(stamp: chrono::NaiveDateTime) -> String {
    if stamp.time() == chrono::NaiveTime::MIN {
        stamp.format("%Y-%m-%d").to_string()
    } else {
        stamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
