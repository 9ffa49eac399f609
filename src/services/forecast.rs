use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::services::cycle_times::{CycleTimeError, cycle_times_in_days};
use crate::services::histogram::{HistogramError, write_histogram_png};
use crate::services::path_accumulator::{accumulate, terminal_values};
use crate::services::percentiles::value_sorted;
use crate::services::probability_plot::{ProbabilityPlotError, write_probability_curve_png};
use crate::services::records_yaml::{RecordsYamlError, deserialize_records_from_yaml_str};
use crate::services::resampler::{ResampleError, resample_with_rng};
use crate::services::forecast_types::{
    DateForecastOutput, DateForecastReport, ForecastPercentile, ItemForecastOutput,
    ItemForecastReport, ItemProbability,
};

/// The percentiles reported by both forecast modes.
const REPORT_PERCENTILES: [f64; 4] = [50.0, 70.0, 85.0, 95.0];

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("failed to read records file: {0}")]
    ReadRecords(#[from] std::io::Error),
    #[error("failed to parse records yaml: {0}")]
    ParseRecords(#[from] RecordsYamlError),
    #[error(transparent)]
    CycleTimes(#[from] CycleTimeError),
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    #[error("invalid target date: {0}")]
    InvalidTargetDate(String),
    #[error("target date {target} is before start date {start}")]
    TargetBeforeStart { start: String, target: String },
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("item count must be greater than zero")]
    InvalidItemCount,
    #[error("item search bound must be greater than zero")]
    InvalidSearchBound,
    #[error("no cycle time history to sample from")]
    EmptyHistory,
    #[error("failed to render histogram: {0}")]
    Histogram(#[from] HistogramError),
    #[error("failed to render probability curve: {0}")]
    ProbabilityPlot(#[from] ProbabilityPlotError),
}

impl From<ResampleError> for ForecastError {
    fn from(error: ResampleError) -> Self {
        match error {
            ResampleError::EmptyHistory => ForecastError::EmptyHistory,
            ResampleError::InvalidTrialCount => ForecastError::InvalidIterations,
            ResampleError::InvalidItemCount => ForecastError::InvalidItemCount,
        }
    }
}

/// Mode A from a records file: simulate completion of `item_count` items,
/// write the histogram PNG and return the report plus raw results.
pub(crate) fn forecast_date_from_records_file(
    records_path: &str,
    iterations: usize,
    item_count: usize,
    start_date: &str,
    histogram_path: &str,
    seed: Option<u64>,
) -> Result<DateForecastOutput, ForecastError> {
    let cycle_times = load_cycle_times(records_path)?;
    let start_date = parse_start_date(start_date)?;

    let mut output = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            forecast_date_with_rng(&cycle_times, iterations, item_count, start_date, &mut rng)?
        }
        None => forecast_date(&cycle_times, iterations, item_count, start_date)?,
    };
    output.report.data_source = data_source_name(records_path);
    write_histogram_png(histogram_path, &output.results)?;
    Ok(output)
}

/// Mode B from a records file: probe item counts 1..=max_items against the
/// horizon between start and target date, write the curve PNG and return the
/// report plus the full probability curve.
pub(crate) fn forecast_items_from_records_file(
    records_path: &str,
    iterations: usize,
    target_date: &str,
    start_date: &str,
    max_items: usize,
    curve_path: &str,
    seed: Option<u64>,
) -> Result<ItemForecastOutput, ForecastError> {
    let cycle_times = load_cycle_times(records_path)?;
    let start = parse_start_date(start_date)?;
    let target = NaiveDate::parse_from_str(target_date, "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidTargetDate(target_date.to_string()))?;
    if target < start {
        return Err(ForecastError::TargetBeforeStart {
            start: start.format("%Y-%m-%d").to_string(),
            target: target.format("%Y-%m-%d").to_string(),
        });
    }
    let horizon_days = target.signed_duration_since(start).num_days() as f32;

    let mut output = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            forecast_items_with_rng(&cycle_times, iterations, horizon_days, max_items, &mut rng)?
        }
        None => forecast_items(&cycle_times, iterations, horizon_days, max_items)?,
    };
    output.report.data_source = data_source_name(records_path);
    output.report.start_date = start.format("%Y-%m-%d").to_string();
    output.report.target_date = target.format("%Y-%m-%d").to_string();
    write_probability_curve_png(curve_path, &output.curve)?;
    Ok(output)
}

pub fn forecast_date(
    cycle_times: &[f32],
    iterations: usize,
    item_count: usize,
    start_date: NaiveDate,
) -> Result<DateForecastOutput, ForecastError> {
    let mut rng = rand::thread_rng();
    forecast_date_with_rng(cycle_times, iterations, item_count, start_date, &mut rng)
}

/// Mode A: resample `iterations` trials of `item_count` durations each,
/// accumulate them into cumulative paths and reduce the terminal values to
/// 50/70/85/95 percentiles with calendar dates.
pub fn forecast_date_with_rng<R: Rng + ?Sized>(
    cycle_times: &[f32],
    iterations: usize,
    item_count: usize,
    start_date: NaiveDate,
    rng: &mut R,
) -> Result<DateForecastOutput, ForecastError> {
    let trials = resample_with_rng(cycle_times, iterations, item_count, rng)?;
    let mut results = terminal_values(&accumulate(&trials));
    results.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let [p50, p70, p85, p95] = REPORT_PERCENTILES.map(|percentile| {
        // results is non-empty: iterations was validated by the resampler.
        let days = value_sorted(&results, percentile).unwrap_or(0.0);
        ForecastPercentile {
            days,
            date: end_date_from_days(start_date, days).format("%Y-%m-%d").to_string(),
        }
    });

    let report = DateForecastReport {
        data_source: String::new(),
        start_date: start_date.format("%Y-%m-%d").to_string(),
        iterations,
        simulated_items: item_count,
        p50,
        p70,
        p85,
        p95,
    };

    Ok(DateForecastOutput { report, results })
}

pub fn forecast_items(
    cycle_times: &[f32],
    iterations: usize,
    horizon_days: f32,
    max_items: usize,
) -> Result<ItemForecastOutput, ForecastError> {
    let mut rng = rand::thread_rng();
    forecast_items_with_rng(cycle_times, iterations, horizon_days, max_items, &mut rng)
}

/// Mode B: for each candidate item count n in 1..=max_items, run an
/// independent ensemble of `iterations` trials with n items and record the
/// fraction of trials finishing within the horizon. More items means no
/// higher chance of fitting the same horizon, so the curve trends downward
/// in n; per-sample noise means it is not strictly monotone and nothing
/// here assumes it is.
pub fn forecast_items_with_rng<R: Rng + ?Sized>(
    cycle_times: &[f32],
    iterations: usize,
    horizon_days: f32,
    max_items: usize,
    rng: &mut R,
) -> Result<ItemForecastOutput, ForecastError> {
    if cycle_times.is_empty() {
        return Err(ForecastError::EmptyHistory);
    }
    if iterations == 0 {
        return Err(ForecastError::InvalidIterations);
    }
    if max_items == 0 {
        return Err(ForecastError::InvalidSearchBound);
    }

    let mut curve = Vec::with_capacity(max_items);
    for items in 1..=max_items {
        let trials = resample_with_rng(cycle_times, iterations, items, rng)?;
        let terminals = terminal_values(&accumulate(&trials));
        let within_horizon = terminals
            .iter()
            .filter(|total| **total <= horizon_days)
            .count();
        curve.push(ItemProbability {
            items,
            probability: within_horizon as f32 / iterations as f32,
        });
    }

    let [p50, p70, p85, p95] =
        [0.5_f32, 0.7, 0.85, 0.95].map(|threshold| largest_count_reaching(&curve, threshold));

    let report = ItemForecastReport {
        data_source: String::new(),
        start_date: String::new(),
        target_date: String::new(),
        horizon_days,
        iterations,
        max_items,
        p50,
        p70,
        p85,
        p95,
    };

    Ok(ItemForecastOutput { report, curve })
}

/// Largest item count whose delivery probability still reaches the
/// threshold, or `None` when not even a single item qualifies. Absence is
/// reported as such, never defaulted.
fn largest_count_reaching(curve: &[ItemProbability], threshold: f32) -> Option<usize> {
    curve
        .iter()
        .rev()
        .find(|point| point.probability >= threshold)
        .map(|point| point.items)
}

fn load_cycle_times(records_path: &str) -> Result<Vec<f32>, ForecastError> {
    let records_yaml = std::fs::read_to_string(records_path)?;
    let records = deserialize_records_from_yaml_str(&records_yaml)?;
    Ok(cycle_times_in_days(&records)?)
}

fn parse_start_date(start_date: &str) -> Result<NaiveDate, ForecastError> {
    NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidStartDate(start_date.to_string()))
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Fractional day offsets round up to the next whole calendar day.
fn end_date_from_days(start_date: NaiveDate, days: f32) -> NaiveDate {
    let whole_days = days.ceil().max(0.0) as i64;
    start_date + chrono::Duration::days(whole_days)
}
