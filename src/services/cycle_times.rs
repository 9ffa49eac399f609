use thiserror::Error;

use crate::domain::task_record::TaskRecord;

#[derive(Error, Debug)]
pub enum CycleTimeError {
    #[error("no completed task records to extract cycle times from")]
    EmptyHistory,
    #[error("record closed at {closure} before its activation at {activation}")]
    InvalidRecord { activation: String, closure: String },
}

/// Derives one cycle time per task record, in fractional days.
///
/// Records that closed before they were activated are rejected, not clamped
/// to zero; an empty history is an error because downstream resampling would
/// be undefined.
pub fn cycle_times_in_days(records: &[TaskRecord]) -> Result<Vec<f32>, CycleTimeError> {
    if records.is_empty() {
        return Err(CycleTimeError::EmptyHistory);
    }

    let mut cycle_times = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_valid() {
            return Err(CycleTimeError::InvalidRecord {
                activation: record.activation.to_string(),
                closure: record.closure.to_string(),
            });
        }
        cycle_times.push(record.cycle_time_days());
    }

    Ok(cycle_times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn extracts_one_cycle_time_per_record() {
        let records = vec![
            record("2026-01-05", "2026-01-12"),
            record("2026-01-06", "2026-01-06"),
            record("2026-01-07 00:00:00", "2026-01-07 06:00:00"),
        ];

        let cycle_times = cycle_times_in_days(&records).unwrap();
        assert_eq!(cycle_times, vec![7.0, 0.0, 0.25]);
    }

    #[test]
    fn empty_history_is_an_error() {
        let error = cycle_times_in_days(&[]).expect_err("expected empty history error");
        assert!(matches!(error, CycleTimeError::EmptyHistory));
    }

    #[test]
    fn record_closed_before_activation_is_rejected_not_clamped() {
        let records = vec![
            record("2026-01-05", "2026-01-12"),
            record("2026-01-10", "2026-01-08"),
        ];

        let error = cycle_times_in_days(&records).expect_err("expected invalid record error");
        assert!(matches!(error, CycleTimeError::InvalidRecord { .. }));
    }
}
