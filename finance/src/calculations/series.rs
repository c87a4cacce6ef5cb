// Aggregates over sequences of values: sliding-window means, sums and means.
use shared::models::Valued;

/// Simple moving average over a sliding window of `period` values.
///
/// The result has `values.len() - period + 1` entries, one per full window.
/// A window larger than the input (or a zero period) yields no entries.
pub fn moving_average(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || period > values.len() {
        return Vec::new();
    }

    values
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}

pub fn sum_values<T: Valued>(entries: &[T]) -> f64 {
    entries.iter().map(Valued::value).sum()
}

/// Arithmetic mean. An empty slice yields 0.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ValueEntry;

    fn assert_f64_vec_eq(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len(), "Vectors differ in length");
        for (i, (val_a, val_b)) in a.iter().zip(b.iter()).enumerate() {
            assert!((val_a - val_b).abs() < 1e-9, "Mismatch at index {}: {} != {}", i, val_a, val_b);
        }
    }

    #[test]
    fn test_moving_average_calculation() {
        let results = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(results, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_moving_average_period_one() {
        // A period of one is just the input
        assert_f64_vec_eq(&moving_average(&[1.5, 2.5, 3.5], 1), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_moving_average_full_window() {
        assert_f64_vec_eq(&moving_average(&[10.0, 20.0, 60.0], 3), &[30.0]);
    }

    #[test]
    fn test_moving_average_insufficient_data() {
        assert!(moving_average(&[1.0, 2.0], 3).is_empty());
        assert!(moving_average(&[], 3).is_empty());
    }

    #[test]
    fn test_moving_average_period_zero() {
        assert!(moving_average(&[1.0, 2.0, 3.0], 0).is_empty());
    }

    #[test]
    fn test_sum_values() {
        let entries = vec![ValueEntry::new(100.0), ValueEntry::new(250.5), ValueEntry::new(-50.5)];
        assert_eq!(sum_values(&entries), 300.0);
        assert_eq!(sum_values::<ValueEntry>(&[]), 0.0);
        assert_eq!(sum_values(&[1.0, 2.0, 3.0]), 6.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[2.0, 4.0, 9.0]), 5.0);
        assert_eq!(average(&[]), 0.0);
    }
}
