//! Empirical CDF construction from a sorted sample set.
//!
//! Two definitions are supported:
//!
//! - **histogram**: partition `[min, max]` into `n` equal-width bins (`n` = sample
//!   count), count samples per bin, take the cumulative sum and divide by the total.
//!   The x coordinates are the right bin edges. Bins are half-open `[a, b)` except the
//!   last, which also includes `max`. When every sample has the same value the range
//!   is widened to `[v - 0.5, v + 0.5]`.
//! - **exact**: one point per unique sample value, y = fraction of samples `<=` value.
//!
//! Both curves are non-decreasing and end at exactly `1.0`.

use crate::domain::{CdfCurve, CdfMethod, SampleSet};
use crate::error::AppError;

/// Build a CDF with the requested method.
pub fn build_cdf(samples: &SampleSet, method: CdfMethod) -> Result<CdfCurve, AppError> {
    match method {
        CdfMethod::Histogram => histogram_cdf(samples),
        CdfMethod::Exact => exact_cdf(samples),
    }
}

/// Histogram-based CDF with one bin per sample.
pub fn histogram_cdf(samples: &SampleSet) -> Result<CdfCurve, AppError> {
    let values = samples.values();
    let (Some(min), Some(max)) = (samples.min(), samples.max()) else {
        return Err(AppError::stats("Cannot build a CDF from an empty sample set."));
    };

    let n = values.len();
    let edges = bin_edges(min, max, n);
    let counts = bin_counts(values, &edges);

    let mut cumulative = Vec::with_capacity(n);
    let mut running = 0usize;
    for c in counts {
        running += c;
        cumulative.push(running);
    }

    let total = running as f64;
    let y = cumulative.iter().map(|&c| c as f64 / total).collect();
    let x = edges[1..].to_vec();

    Ok(CdfCurve {
        method: CdfMethod::Histogram,
        x,
        y,
    })
}

/// Exact step ECDF: `(unique value, rank / n)`.
pub fn exact_cdf(samples: &SampleSet) -> Result<CdfCurve, AppError> {
    let values = samples.values();
    if values.is_empty() {
        return Err(AppError::stats("Cannot build a CDF from an empty sample set."));
    }

    let n = values.len() as f64;
    let mut x: Vec<f64> = Vec::new();
    let mut y: Vec<f64> = Vec::new();

    for (i, &v) in values.iter().enumerate() {
        let frac = (i + 1) as f64 / n;
        // Sorted input: ties are adjacent, keep the highest rank for each value.
        if x.last() == Some(&v) {
            if let Some(last) = y.last_mut() {
                *last = frac;
            }
        } else {
            x.push(v);
            y.push(frac);
        }
    }

    Ok(CdfCurve {
        method: CdfMethod::Exact,
        x,
        y,
    })
}

/// `n + 1` equally spaced edges over `[min, max]`; the last edge is exactly the upper bound.
///
/// Edges are interpolated as `lo * (1 - t) + hi * t` so that a span wider than
/// `f64::MAX` never materializes.
fn bin_edges(min: f64, max: f64, n: usize) -> Vec<f64> {
    let (lo, hi) = if max > min { (min, max) } else { (min - 0.5, max + 0.5) };

    let mut edges: Vec<f64> = (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            lo * (1.0 - t) + hi * t
        })
        .collect();
    edges[0] = lo;
    edges[n] = hi;
    edges
}

/// Bin `i` holds `edges[i] <= v < edges[i + 1]`; the last bin also holds `hi`.
fn bin_counts(values: &[f64], edges: &[f64]) -> Vec<usize> {
    let n = edges.len() - 1;

    let mut counts = vec![0usize; n];
    for &v in values {
        // edges[0] is the minimum, so at least one edge is <= v.
        let idx = edges.partition_point(|&e| e <= v).saturating_sub(1).min(n - 1);
        counts[idx] += 1;
    }
    counts
}
