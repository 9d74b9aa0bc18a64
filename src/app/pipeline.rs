//! The CDF pipeline shared by every output mode.
//!
//! Per input file, in order: load -> sort -> summary statistics -> CDF curve.
//! The result is returned as plain data; printing and rendering happen in the
//! caller.

use std::path::Path;

use crate::domain::{CdfConfig, CdfMethod, ChartBounds, SampleSet, Series};
use crate::error::AppError;
use crate::io::ingest::load_samples;
use crate::math::{build_cdf, summarize};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// One entry per data file, in input order.
    pub series: Vec<Series>,
    pub bounds: ChartBounds,
}

/// Supplied labels first, then `data0`, `data1`, ... for the files without one.
///
/// Backfill only happens for more than one file; a single unlabeled file
/// gets no label at all.
pub fn resolve_labels(file_count: usize, supplied: &[String]) -> Vec<String> {
    let mut labels = supplied.to_vec();
    if labels.len() < file_count && file_count > 1 {
        let missing = file_count - labels.len();
        labels.extend((0..missing).map(|i| format!("data{i}")));
    }
    if supplied.len() > file_count {
        tracing::warn!(
            labels = supplied.len(),
            files = file_count,
            "more labels than data files; extra labels are ignored"
        );
    }
    labels
}

/// Compute statistics and the CDF for an already loaded sample set.
pub fn build_series(
    path: &Path,
    label: Option<String>,
    samples: &SampleSet,
    method: CdfMethod,
) -> Result<Series, AppError> {
    let stats = summarize(samples)
        .map_err(|e| AppError::new(e.exit_code(), format!("{}: {e}", path.display())))?;
    let curve = build_cdf(samples, method)?;

    tracing::debug!(
        path = %path.display(),
        n = stats.n,
        points = curve.len(),
        ?method,
        "computed CDF"
    );

    Ok(Series {
        path: path.to_path_buf(),
        label,
        stats,
        curve,
    })
}

/// Execute the full pipeline over every configured data file.
///
/// The first failing file aborts the run.
pub fn run_cdf(config: &CdfConfig) -> Result<RunOutput, AppError> {
    let labels = resolve_labels(config.datafiles.len(), &config.labels);

    let mut series = Vec::with_capacity(config.datafiles.len());
    for (i, path) in config.datafiles.iter().enumerate() {
        let samples = load_samples(path, config.column)?;
        let label = labels.get(i).cloned();
        series.push(build_series(path, label, &samples, config.method)?);
    }

    let bounds = ChartBounds::from_series(&series);

    Ok(RunOutput { series, bounds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use crate::domain::OutputTarget;
    use crate::report::format_run_report;

    fn config(files: Vec<PathBuf>, labels: Vec<String>, column: usize) -> CdfConfig {
        CdfConfig {
            datafiles: files,
            labels,
            column,
            method: CdfMethod::Histogram,
            xlabel: "data".to_string(),
            ylabel: "CDF".to_string(),
            title: "CDF Graph of Data".to_string(),
            caption: None,
            output: OutputTarget::Ascii { cols: 80, rows: 20 },
            export_curves: None,
        }
    }

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn labels_backfill_after_supplied() {
        let labels = resolve_labels(3, &["A".to_string()]);
        assert_eq!(labels, vec!["A", "data0", "data1"]);
    }

    #[test]
    fn single_file_without_labels_has_none() {
        assert!(resolve_labels(1, &[]).is_empty());
        assert_eq!(resolve_labels(1, &["only".to_string()]), vec!["only"]);
    }

    #[test]
    fn surplus_labels_are_kept_untouched() {
        let supplied = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(resolve_labels(2, &supplied), supplied);
    }

    #[test]
    fn column_selection_and_stats() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.txt", "1 10\n2 20\n3 30\n");

        let out = run_cdf(&config(vec![a.clone()], Vec::new(), 1)).unwrap();
        assert_eq!(out.series.len(), 1);
        let s = &out.series[0];
        assert_eq!(s.label, None);
        assert_eq!(s.stats.mean, 20.0);
        assert_eq!(s.stats.max, 30.0);
        assert_eq!(s.stats.min, 10.0);
        assert_eq!(s.stats.stdev, 10.0);

        let report = format_run_report(&out.series);
        assert!(report.contains("- avg  : 20.0\n"));
        assert!(report.contains("- max  : 30.0\n"));
        assert!(report.contains("- min  : 10.0\n"));
    }

    #[test]
    fn two_files_report_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let b = write(&dir, "b.txt", "5\n6\n");
        let a = write(&dir, "a.txt", "1\n2\n3\n");

        let out = run_cdf(&config(vec![b.clone(), a.clone()], Vec::new(), 0)).unwrap();
        assert_eq!(out.series[0].label.as_deref(), Some("data0"));
        assert_eq!(out.series[1].label.as_deref(), Some("data1"));

        let report = format_run_report(&out.series);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], format!("data: {}", b.display()));
        assert_eq!(lines[5], format!("data: {}", a.display()));
        assert!(lines[1..5].iter().all(|l| l.starts_with("- ")));
        assert!(lines[6..10].iter().all(|l| l.starts_with("- ")));
    }

    #[test]
    fn same_file_twice_gives_identical_curves() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(&dir, "a.txt", "3.2\n1.1\n7.9\n4.4\n4.4\n0.3\n");

        let out = run_cdf(&config(vec![a.clone(), a.clone()], Vec::new(), 0)).unwrap();
        assert_eq!(out.series[0].curve, out.series[1].curve);
        assert_eq!(out.series[0].curve.y.last().copied(), Some(1.0));
    }

    #[test]
    fn bounds_cover_every_series() {
        let dir = tempfile::tempdir().unwrap();
        let wide = write(&dir, "wide.txt", "1\n100\n");
        let narrow = write(&dir, "narrow.txt", "2\n4\n");

        let out = run_cdf(&config(vec![wide, narrow], Vec::new(), 0)).unwrap();
        assert_eq!(out.bounds.x, [0.0, 100.0]);
    }

    #[test]
    fn singleton_file_fails_on_stdev() {
        let dir = tempfile::tempdir().unwrap();
        let one = write(&dir, "one.txt", "42\n");

        let err = run_cdf(&config(vec![one], Vec::new(), 0)).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_STATS);
        assert!(err.message().contains("one.txt"), "{err}");
    }

    #[test]
    fn bad_file_aborts_whole_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(&dir, "good.txt", "1\n2\n");
        let bad = write(&dir, "bad.txt", "1\nx\n");

        let err = run_cdf(&config(vec![good, bad], Vec::new(), 0)).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
