//! Write computed CDF curves to JSON.
//!
//! The JSON file is the "portable" representation of a run:
//! - which column and CDF method were used
//! - per file: path, label, summary statistics and the curve points

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::domain::{CdfConfig, CdfMethod, Series};
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct CurvesFile<'a> {
    tool: &'static str,
    column: usize,
    method: CdfMethod,
    series: &'a [Series],
}

/// Write all series (stats + curve) as pretty-printed JSON.
pub fn write_curves_json(path: &Path, series: &[Series], config: &CdfConfig) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create curves JSON '{}': {e}", path.display())))?;

    let doc = CurvesFile {
        tool: "cdfplot",
        column: config.column,
        method: config.method,
        series,
    };

    serde_json::to_writer_pretty(BufWriter::new(file), &doc)
        .map_err(|e| AppError::input(format!("Failed to write curves JSON: {e}")))?;

    tracing::info!(path = %path.display(), series = series.len(), "wrote curves JSON");
    Ok(())
}
