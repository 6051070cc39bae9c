//! # Corrosion Rate Statistics
//!
//! Reporting roll-ups over a set of corrosion rates: mean, maximum, and
//! the nearest-rank 95th percentile. Empty input is a legitimate state
//! for a fresh report, so it yields an all-zero result rather than an
//! error.

use serde::{Deserialize, Serialize};

/// Aggregate statistics over a set of corrosion rates (mpy).
///
/// ## JSON Example
///
/// ```json
/// {
///   "average_mpy": 2.1,
///   "maximum_mpy": 5.5,
///   "percentile_95_mpy": 5.5,
///   "count": 12
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrosionRateStats {
    /// Arithmetic mean (mpy)
    pub average_mpy: f64,

    /// Largest observed rate (mpy)
    pub maximum_mpy: f64,

    /// Nearest-rank 95th percentile (mpy): sort ascending, take index
    /// floor(0.95 * n), clamped to the last element
    pub percentile_95_mpy: f64,

    /// Number of rates aggregated
    pub count: usize,
}

impl CorrosionRateStats {
    /// All-zero statistics for an empty rate set
    pub fn empty() -> Self {
        CorrosionRateStats {
            average_mpy: 0.0,
            maximum_mpy: 0.0,
            percentile_95_mpy: 0.0,
            count: 0,
        }
    }
}

/// Aggregate a set of corrosion rates.
///
/// Empty input yields [`CorrosionRateStats::empty`], not an error.
pub fn corrosion_rate_stats(rates_mpy: &[f64]) -> CorrosionRateStats {
    if rates_mpy.is_empty() {
        return CorrosionRateStats::empty();
    }

    let count = rates_mpy.len();
    let average = rates_mpy.iter().sum::<f64>() / count as f64;
    let maximum = rates_mpy.iter().cloned().fold(f64::MIN, f64::max);

    let mut sorted = rates_mpy.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let index = ((0.95 * count as f64).floor() as usize).min(count - 1);
    let percentile_95 = sorted[index];

    CorrosionRateStats {
        average_mpy: average,
        maximum_mpy: maximum,
        percentile_95_mpy: percentile_95,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_zeros() {
        let stats = corrosion_rate_stats(&[]);
        assert_eq!(stats, CorrosionRateStats::empty());
    }

    #[test]
    fn test_single_rate() {
        let stats = corrosion_rate_stats(&[2.5]);
        assert_eq!(stats.average_mpy, 2.5);
        assert_eq!(stats.maximum_mpy, 2.5);
        assert_eq!(stats.percentile_95_mpy, 2.5);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_known_values() {
        let rates = [1.0, 2.0, 3.0, 4.0];
        let stats = corrosion_rate_stats(&rates);
        assert!((stats.average_mpy - 2.5).abs() < 1e-12);
        assert_eq!(stats.maximum_mpy, 4.0);
        // floor(0.95 * 4) = 3 -> sorted[3] = 4.0
        assert_eq!(stats.percentile_95_mpy, 4.0);
    }

    #[test]
    fn test_percentile_below_last_for_large_n() {
        // 40 rates: floor(0.95 * 40) = 38, second from last
        let rates: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        let stats = corrosion_rate_stats(&rates);
        assert_eq!(stats.percentile_95_mpy, 39.0);
        assert_eq!(stats.maximum_mpy, 40.0);
    }

    #[test]
    fn test_monotonicity_bounds() {
        let rates = [0.5, 1.5, 1.5, 2.0, 9.0, 3.0, 0.1];
        let stats = corrosion_rate_stats(&rates);
        assert!(stats.average_mpy <= stats.maximum_mpy);
        assert!(stats.percentile_95_mpy <= stats.maximum_mpy);
        assert!(stats.percentile_95_mpy >= stats.average_mpy);
    }

    #[test]
    fn test_unsorted_input_handled() {
        let stats = corrosion_rate_stats(&[5.0, 1.0, 3.0]);
        // floor(0.95 * 3) = 2 -> sorted[2] = 5.0
        assert_eq!(stats.percentile_95_mpy, 5.0);
        assert!((stats.average_mpy - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let stats = corrosion_rate_stats(&[1.0, 2.0]);
        let json = serde_json::to_string(&stats).unwrap();
        let roundtrip: CorrosionRateStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, roundtrip);
    }
}
