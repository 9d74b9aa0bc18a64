//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during the pipeline
//! - exported to JSON
//! - handed to any of the renderers (viewer, ASCII, image export)

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// How the CDF curve is constructed from the sorted samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CdfMethod {
    /// Histogram with as many equal-width bins as there are samples.
    ///
    /// x = right bin edges, y = cumulative counts normalized by the total.
    Histogram,
    /// Exact step ECDF: one point per unique value, y = fraction of samples `<=` x.
    Exact,
}

/// Where the chart ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Full-screen terminal viewer.
    Interactive,
    /// Plain ASCII chart written to stdout.
    Ascii { cols: usize, rows: usize },
    /// Image file; format is picked from the extension.
    Export { path: PathBuf, width: u32, height: u32 },
}

/// Immutable run configuration, built once from the CLI.
#[derive(Debug, Clone)]
pub struct CdfConfig {
    pub datafiles: Vec<PathBuf>,
    pub labels: Vec<String>,
    pub column: usize,
    pub method: CdfMethod,
    pub xlabel: String,
    pub ylabel: String,
    pub title: String,
    pub caption: Option<String>,
    pub output: OutputTarget,
    pub export_curves: Option<PathBuf>,
}

/// Samples loaded from one file, sorted ascending.
///
/// Construction sorts; there is no way to obtain an unsorted `SampleSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    pub fn from_unsorted(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Summary statistics printed for every input file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStats {
    pub n: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Sample standard deviation (divisor `n - 1`).
    pub stdev: f64,
}

/// A computed CDF: parallel `x`/`y` vectors, `y` non-decreasing and ending at 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CdfCurve {
    pub method: CdfMethod,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CdfCurve {
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// One plotted line: a file's samples, its legend label and its curve.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub path: PathBuf,
    /// `None` when the run has no labels at all (single file, no `--labels`).
    pub label: Option<String>,
    pub stats: SampleStats,
    pub curve: CdfCurve,
}

/// Axis ranges shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl ChartBounds {
    /// x spans `[min(0, global min), global max]` over all series; y is always `[0, 1]`.
    pub fn from_series(series: &[Series]) -> Self {
        let mut lo = 0.0_f64;
        let mut hi = f64::NEG_INFINITY;
        for s in series {
            lo = lo.min(s.stats.min);
            hi = hi.max(s.stats.max);
        }
        if !hi.is_finite() || !lo.is_finite() || hi <= lo {
            hi = lo + 1.0;
        }
        Self {
            x: [lo, hi],
            y: [0.0, 1.0],
        }
    }
}

/// Text decorations shared by every renderer.
#[derive(Debug, Clone, Copy)]
pub struct ChartText<'a> {
    pub title: &'a str,
    pub xlabel: &'a str,
    pub ylabel: &'a str,
    pub caption: Option<&'a str>,
}

impl<'a> ChartText<'a> {
    pub fn from_config(config: &'a CdfConfig) -> Self {
        Self {
            title: &config.title,
            xlabel: &config.xlabel,
            ylabel: &config.ylabel,
            caption: config.caption.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_with_range(min: f64, max: f64) -> Series {
        Series {
            path: PathBuf::from("x"),
            label: None,
            stats: SampleStats {
                n: 2,
                mean: (min + max) / 2.0,
                max,
                min,
                stdev: 0.0,
            },
            curve: CdfCurve {
                method: CdfMethod::Exact,
                x: vec![min, max],
                y: vec![0.5, 1.0],
            },
        }
    }

    #[test]
    fn sample_set_sorts_on_construction() {
        let s = SampleSet::from_unsorted(vec![3.0, -1.0, 2.0]);
        assert_eq!(s.values(), &[-1.0, 2.0, 3.0]);
        assert_eq!(s.min(), Some(-1.0));
        assert_eq!(s.max(), Some(3.0));
    }

    #[test]
    fn bounds_use_global_max_not_last_series() {
        let series = vec![series_with_range(1.0, 50.0), series_with_range(2.0, 10.0)];
        let b = ChartBounds::from_series(&series);
        assert_eq!(b.x, [0.0, 50.0]);
        assert_eq!(b.y, [0.0, 1.0]);
    }

    #[test]
    fn bounds_extend_below_zero_for_negative_data() {
        let series = vec![series_with_range(-5.0, 5.0)];
        let b = ChartBounds::from_series(&series);
        assert_eq!(b.x, [-5.0, 5.0]);
    }

    #[test]
    fn bounds_widen_degenerate_range() {
        let series = vec![series_with_range(-3.0, -3.0)];
        let b = ChartBounds::from_series(&series);
        assert_eq!(b.x, [-3.0, -2.0]);
    }
}
