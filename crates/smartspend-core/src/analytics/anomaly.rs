//! Outlier counting with a z-score style rule
//!
//! Flags amounts more than `sigma` sample standard deviations above the mean.
//! Skewed data will produce false positives and negatives; that is expected.

use super::stats::{mean, sample_std_dev};

/// Standard deviations above the mean before an amount counts as unusual
pub const DEFAULT_ANOMALY_SIGMA: f64 = 2.0;

/// Count amounts above `mean + 2 * std`
pub fn detect_anomalies(amounts: &[f64]) -> usize {
    detect_anomalies_with_sigma(amounts, DEFAULT_ANOMALY_SIGMA)
}

/// Count amounts strictly above `mean + sigma * std`
///
/// Returns 0 with fewer than two amounts or when every amount is equal.
pub fn detect_anomalies_with_sigma(amounts: &[f64], sigma: f64) -> usize {
    let std = match sample_std_dev(amounts) {
        Some(std) if std > 0.0 => std,
        _ => return 0,
    };

    let threshold = mean(amounts) + sigma * std;
    amounts.iter().filter(|&&a| a > threshold).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_outlier() {
        let mut amounts = vec![10.0; 9];
        amounts.push(100.0);
        assert_eq!(detect_anomalies(&amounts), 1);
    }

    #[test]
    fn test_zero_variance() {
        assert_eq!(detect_anomalies(&[10.0; 5]), 0);
    }

    #[test]
    fn test_too_few_rows() {
        assert_eq!(detect_anomalies(&[]), 0);
        assert_eq!(detect_anomalies(&[1_000_000.0]), 0);
    }

    #[test]
    fn test_no_outliers_in_spread_data() {
        assert_eq!(detect_anomalies(&[10.0, 20.0, 30.0, 40.0, 50.0]), 0);
    }

    #[test]
    fn test_custom_sigma() {
        let amounts = [10.0, 20.0, 30.0, 40.0, 50.0];
        // mean 30, std ~15.81: sigma 1 puts the threshold near 45.8
        assert_eq!(detect_anomalies_with_sigma(&amounts, 1.0), 1);
        assert_eq!(detect_anomalies_with_sigma(&amounts, 0.0), 2);
    }
}
