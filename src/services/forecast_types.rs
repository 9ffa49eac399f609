use serde::Serialize;

/// One percentile of the completion-time distribution: day offset from the
/// start date plus the calendar date it lands on.
#[derive(Serialize, Debug, Clone)]
pub struct ForecastPercentile {
    pub days: f32,
    pub date: String,
}

/// Mode A report: "when are K items done?"
#[derive(Serialize, Debug, Clone)]
pub struct DateForecastReport {
    pub data_source: String,
    pub start_date: String,
    pub iterations: usize,
    pub simulated_items: usize,
    pub p50: ForecastPercentile,
    pub p70: ForecastPercentile,
    pub p85: ForecastPercentile,
    pub p95: ForecastPercentile,
}

#[derive(Serialize, Debug, Clone)]
pub struct DateForecastOutput {
    pub report: DateForecastReport,
    /// Sorted terminal completion times of every trial, for histogram rendering.
    pub results: Vec<f32>,
}

/// One point on the Mode B curve: chance of delivering `items` items within
/// the horizon.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ItemProbability {
    pub items: usize,
    pub probability: f32,
}

/// Mode B report: "how many items fit before the target date?"
///
/// The threshold fields hold the smallest item count whose delivery
/// probability reaches the threshold, or `None` when no count within the
/// search bound qualifies. Absence is part of the contract; it is never
/// defaulted away.
#[derive(Serialize, Debug, Clone)]
pub struct ItemForecastReport {
    pub data_source: String,
    pub start_date: String,
    pub target_date: String,
    pub horizon_days: f32,
    pub iterations: usize,
    pub max_items: usize,
    pub p50: Option<usize>,
    pub p70: Option<usize>,
    pub p85: Option<usize>,
    pub p95: Option<usize>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ItemForecastOutput {
    pub report: ItemForecastReport,
    pub curve: Vec<ItemProbability>,
}
