//! Descriptive statistics over a sorted sample set.

use crate::domain::{SampleSet, SampleStats};
use crate::error::AppError;

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divisor `n - 1`).
///
/// Undefined for fewer than two samples, which is reported as an error.
pub fn sample_stdev(values: &[f64]) -> Result<f64, AppError> {
    if values.len() < 2 {
        return Err(AppError::stats(format!(
            "Standard deviation requires at least two samples (got {}).",
            values.len()
        )));
    }
    // len >= 2 so the mean exists.
    let m = mean(values).unwrap_or_default();
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok((ss / (values.len() as f64 - 1.0)).sqrt())
}

/// Compute the per-file summary. Min/max come straight from the sorted ends.
pub fn summarize(samples: &SampleSet) -> Result<SampleStats, AppError> {
    let values = samples.values();
    let (Some(min), Some(max), Some(avg)) = (samples.min(), samples.max(), mean(values)) else {
        return Err(AppError::stats("No samples to summarize."));
    };
    let stdev = sample_stdev(values)?;

    Ok(SampleStats {
        n: values.len(),
        mean: avg,
        max,
        min,
        stdev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_basic() {
        let s = SampleSet::from_unsorted(vec![30.0, 10.0, 20.0]);
        let stats = summarize(&s).unwrap();
        assert_eq!(stats.n, 3);
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.stdev, 10.0);
    }

    #[test]
    fn stdev_uses_n_minus_one() {
        // Population stdev would be 2.0 here.
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_stdev(&v).unwrap();
        assert!((sd - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn stdev_of_single_sample_is_an_error() {
        let err = sample_stdev(&[1.0]).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_STATS);

        let s = SampleSet::from_unsorted(vec![42.0]);
        assert!(summarize(&s).is_err());
    }

    #[test]
    fn summarize_empty_is_an_error() {
        let s = SampleSet::from_unsorted(Vec::new());
        let err = summarize(&s).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_STATS);
        assert_eq!(mean(&[]), None);
    }
}
