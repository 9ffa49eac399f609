/// Percentile helpers for already-sorted slices.
///
/// The rule is linear interpolation between order statistics: the percentile
/// maps to a position within `[0, len-1]`, and values between two order
/// statistics are interpolated. This matches the common "linear" quantile
/// definition and is worth stating because nearest-rank rules give different
/// answers at the margins.
///
/// - Empty input => `None`.
/// - `percentile <= 0` => first element.
/// - `percentile >= 100` => last element.

/// Returns the percentile value from a slice sorted in ascending order.
pub fn value_sorted(sorted_values: &[f32], percentile: f64) -> Option<f32> {
    if sorted_values.is_empty() {
        return None;
    }
    if percentile <= 0.0 {
        return sorted_values.first().copied();
    }
    if percentile >= 100.0 {
        return sorted_values.last().copied();
    }

    let position = (percentile / 100.0) * (sorted_values.len() as f64 - 1.0);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let lower_value = sorted_values[lower];
    let upper_value = sorted_values[upper];
    if lower == upper {
        return Some(lower_value);
    }

    let fraction = (position - lower as f64) as f32;
    Some(lower_value + (upper_value - lower_value) * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_sorted_returns_none_for_empty_input() {
        let values: [f32; 0] = [];
        assert_eq!(value_sorted(&values, 50.0), None);
    }

    #[test]
    fn value_sorted_clamps_to_first_and_last() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(value_sorted(&values, -1.0), Some(10.0));
        assert_eq!(value_sorted(&values, 0.0), Some(10.0));
        assert_eq!(value_sorted(&values, 100.0), Some(30.0));
        assert_eq!(value_sorted(&values, 1000.0), Some(30.0));
    }

    #[test]
    fn value_sorted_hits_exact_order_statistics() {
        // len=5 => positions 0..=4, p25/p50/p75 land on indices 1/2/3
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(value_sorted(&values, 25.0), Some(1.0));
        assert_eq!(value_sorted(&values, 50.0), Some(2.0));
        assert_eq!(value_sorted(&values, 75.0), Some(3.0));
    }

    #[test]
    fn value_sorted_interpolates_between_order_statistics() {
        // len=2 => p50 sits halfway between the two elements
        let values = [10.0, 20.0];
        assert_eq!(value_sorted(&values, 50.0), Some(15.0));
        assert_eq!(value_sorted(&values, 75.0), Some(17.5));
    }

    #[test]
    fn value_sorted_is_monotone_in_the_percentile() {
        let values = [1.0, 1.5, 4.0, 4.0, 9.0, 12.5];
        let mut previous = f32::NEG_INFINITY;
        for percentile in [0.0, 10.0, 50.0, 70.0, 85.0, 95.0, 100.0] {
            let value = value_sorted(&values, percentile).unwrap();
            assert!(value >= previous, "percentile {percentile} went backwards");
            previous = value;
        }
    }
}
