//! Formatted terminal output.
//!
//! Formatting lives in one place so the math stays clean and output changes
//! are localized.

use std::path::Path;

use crate::domain::{SampleStats, Series};

/// Statistics block for one file: the path line followed by avg/max/min/stdv.
pub fn format_stats_block(path: &Path, stats: &SampleStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("data: {}\n", path.display()));
    out.push_str(&format!("- avg  : {}\n", fmt_float(stats.mean)));
    out.push_str(&format!("- max  : {}\n", fmt_float(stats.max)));
    out.push_str(&format!("- min  : {}\n", fmt_float(stats.min)));
    out.push_str(&format!("- stdv : {}\n", fmt_float(stats.stdev)));
    out
}

/// All blocks, in series (= input file) order.
pub fn format_run_report(series: &[Series]) -> String {
    series
        .iter()
        .map(|s| format_stats_block(&s.path, &s.stats))
        .collect()
}

/// Shortest round-trip representation; integral values keep a trailing `.0`.
///
/// Values below `1e-4` or from `1e16` up use scientific notation with a signed,
/// at least two-digit exponent (`1e-05`, `1.5e+16`).
pub fn fmt_float(v: f64) -> String {
    let repr = format!("{v:?}");
    let Some((mantissa, exp)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
