use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: f32 = 86_400.0;

/// One completed unit of work: when it was activated and when it was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub activation: NaiveDateTime,
    pub closure: NaiveDateTime,
}

impl TaskRecord {
    pub fn new(activation: NaiveDateTime, closure: NaiveDateTime) -> Self {
        Self { activation, closure }
    }

    /// A record is usable only when it was closed at or after its activation.
    pub fn is_valid(&self) -> bool {
        self.closure >= self.activation
    }

    /// Elapsed time between activation and closure, in fractional days.
    /// Fractions are kept here; rounding happens only at presentation.
    pub fn cycle_time_days(&self) -> f32 {
        self.closure
            .signed_duration_since(self.activation)
            .num_seconds() as f32
            / SECONDS_PER_DAY
    }

    /// Parses a timestamp in `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
    /// or date-only `YYYY-MM-DD` form (date-only means midnight).
    pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
            return Some(stamp);
        }
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
            return Some(stamp);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    }
}
