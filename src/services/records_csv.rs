use thiserror::Error;

use crate::domain::task_record::TaskRecord;

#[derive(Error, Debug)]
pub enum RecordsCsvError {
    #[error("input has no header line")]
    MissingHeader,
    #[error("column {0} not found in header")]
    MissingColumn(String),
    #[error("invalid timestamp on line {line}: {value}")]
    InvalidTimestamp { line: usize, value: String },
    #[error("line {line} has {found} fields, expected at least {expected}")]
    ShortLine {
        line: usize,
        found: usize,
        expected: usize,
    },
    #[error("record on line {line} closed at {closure} before its activation at {activation}")]
    InvalidRecord {
        line: usize,
        activation: String,
        closure: String,
    },
}

/// Parses a delimited export with a header line into task records.
///
/// The activation and closure columns are located by header name, so extra
/// columns and arbitrary column order are fine. A record whose closure
/// precedes its activation is rejected with its line number; such rows must
/// never reach the simulation as zero-duration samples. Blank lines are
/// skipped.
pub fn parse_records_csv(
    input: &str,
    separator: char,
    activation_column: &str,
    closure_column: &str,
) -> Result<Vec<TaskRecord>, RecordsCsvError> {
    let mut lines = input.lines().enumerate();
    let (_, header) = lines.next().ok_or(RecordsCsvError::MissingHeader)?;

    let columns: Vec<&str> = header.split(separator).map(str::trim).collect();
    let activation_index = column_index(&columns, activation_column)?;
    let closure_index = column_index(&columns, closure_column)?;
    let expected = activation_index.max(closure_index) + 1;

    let mut records = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let fields: Vec<&str> = line.split(separator).map(str::trim).collect();
        if fields.len() < expected {
            return Err(RecordsCsvError::ShortLine {
                line: line_number,
                found: fields.len(),
                expected,
            });
        }

        let activation = parse_field(fields[activation_index], line_number)?;
        let closure = parse_field(fields[closure_index], line_number)?;
        let record = TaskRecord::new(activation, closure);
        if !record.is_valid() {
            return Err(RecordsCsvError::InvalidRecord {
                line: line_number,
                activation: fields[activation_index].to_string(),
                closure: fields[closure_index].to_string(),
            });
        }
        records.push(record);
    }

    Ok(records)
}

fn column_index(columns: &[&str], name: &str) -> Result<usize, RecordsCsvError> {
    columns
        .iter()
        .position(|column| column.eq_ignore_ascii_case(name))
        .ok_or_else(|| RecordsCsvError::MissingColumn(name.to_string()))
}

fn parse_field(value: &str, line: usize) -> Result<chrono::NaiveDateTime, RecordsCsvError> {
    TaskRecord::parse_timestamp(value).ok_or_else(|| RecordsCsvError::InvalidTimestamp {
        line,
        value: value.to_string(),
    })
}
