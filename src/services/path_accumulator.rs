/// Converts each trial's duration sequence into its cumulative path: position
/// `i` of the output row holds the total elapsed days after completing the
/// first `i + 1` items. Rows stay non-decreasing because durations are
/// non-negative.
pub fn accumulate(trials: &[Vec<f32>]) -> Vec<Vec<f32>> {
    trials
        .iter()
        .map(|trial| {
            let mut elapsed = 0.0_f32;
            trial
                .iter()
                .map(|duration| {
                    elapsed += duration;
                    elapsed
                })
                .collect()
        })
        .collect()
}

/// The terminal value of each cumulative path: total elapsed days to complete
/// every item in that trial. Empty rows contribute 0.
pub fn terminal_values(cumulative: &[Vec<f32>]) -> Vec<f32> {
    cumulative
        .iter()
        .map(|path| path.last().copied().unwrap_or(0.0))
        .collect()
}
