use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResampleError {
    #[error("no cycle time history to sample from")]
    EmptyHistory,
    #[error("trial count must be greater than zero")]
    InvalidTrialCount,
    #[error("items per trial must be greater than zero")]
    InvalidItemCount,
}

/// Draws `trial_count` simulated trials of `items_per_trial` durations each,
/// sampled uniformly and independently WITH replacement from `durations`.
///
/// Sampling with replacement is the contract: `items_per_trial` may exceed
/// the history size by any amount. Callers that need reproducible output pass
/// a seeded rng.
pub fn resample_with_rng<R: Rng + ?Sized>(
    durations: &[f32],
    trial_count: usize,
    items_per_trial: usize,
    rng: &mut R,
) -> Result<Vec<Vec<f32>>, ResampleError> {
    if durations.is_empty() {
        return Err(ResampleError::EmptyHistory);
    }
    if trial_count == 0 {
        return Err(ResampleError::InvalidTrialCount);
    }
    if items_per_trial == 0 {
        return Err(ResampleError::InvalidItemCount);
    }

    let mut trials = Vec::with_capacity(trial_count);
    for _ in 0..trial_count {
        let mut trial = Vec::with_capacity(items_per_trial);
        for _ in 0..items_per_trial {
            // Non-empty slice, so choose never returns None.
            let duration = durations.choose(rng).copied().unwrap_or_default();
            trial.push(duration);
        }
        trials.push(trial);
    }

    Ok(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn resample_produces_requested_matrix_shape() {
        let durations = [1.0, 2.0, 3.0];
        let mut rng = StdRng::seed_from_u64(7);

        let trials = resample_with_rng(&durations, 4, 6, &mut rng).unwrap();
        assert_eq!(trials.len(), 4);
        assert!(trials.iter().all(|trial| trial.len() == 6));
    }

    #[test]
    fn resample_only_emits_values_from_the_history() {
        let durations = [0.5, 2.0, 7.25];
        let mut rng = StdRng::seed_from_u64(99);

        let trials = resample_with_rng(&durations, 10, 20, &mut rng).unwrap();
        for trial in &trials {
            for value in trial {
                assert!(durations.contains(value), "{value} not in history");
            }
        }
    }

    #[test]
    fn resample_tolerates_items_far_beyond_history_size() {
        let durations = [3.0];
        let mut rng = StdRng::seed_from_u64(1);

        let trials = resample_with_rng(&durations, 2, 500, &mut rng).unwrap();
        assert!(trials.iter().all(|trial| trial.len() == 500));
        assert!(trials.iter().flatten().all(|value| *value == 3.0));
    }

    #[test]
    fn resample_is_reproducible_for_a_fixed_seed() {
        let durations = [1.0, 4.0, 2.5, 8.0];

        let mut first_rng = StdRng::seed_from_u64(42);
        let first = resample_with_rng(&durations, 5, 9, &mut first_rng).unwrap();
        let mut second_rng = StdRng::seed_from_u64(42);
        let second = resample_with_rng(&durations, 5, 9, &mut second_rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn resample_rejects_empty_history_and_nonpositive_parameters() {
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            resample_with_rng(&[], 10, 5, &mut rng),
            Err(ResampleError::EmptyHistory)
        ));
        assert!(matches!(
            resample_with_rng(&[1.0], 0, 5, &mut rng),
            Err(ResampleError::InvalidTrialCount)
        ));
        assert!(matches!(
            resample_with_rng(&[1.0], 10, 0, &mut rng),
            Err(ResampleError::InvalidItemCount)
        ));
    }
}
