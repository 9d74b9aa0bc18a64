//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - runs the CDF pipeline over every data file
//! - prints the per-file statistics
//! - renders the chart (viewer, ASCII, or image export)

use std::io::{IsTerminal, Write};

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{CdfConfig, ChartText, OutputTarget};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cdfplot` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let config = config_from_args(&cli, std::io::stdout().is_terminal());
    tracing::debug!(?config, "resolved configuration");

    // Reject an unusable export path before reading any data.
    if let OutputTarget::Export { path, .. } = &config.output {
        crate::io::export::ImageFormat::from_path(path)?;
    }

    let output = pipeline::run_cdf(&config)?;

    print!("{}", crate::report::format_run_report(&output.series));
    // The viewer switches to the alternate screen; get the report out first.
    std::io::stdout()
        .flush()
        .map_err(|e| AppError::render(format!("Failed to write statistics: {e}")))?;

    if let Some(path) = &config.export_curves {
        crate::io::curve::write_curves_json(path, &output.series, &config)?;
    }

    render(&config, &output)
}

/// Build the immutable run configuration.
///
/// Without `--export`, the viewer is used only when stdout is a terminal and
/// `--ascii` was not requested.
pub fn config_from_args(args: &Cli, stdout_is_terminal: bool) -> CdfConfig {
    let output = match &args.export {
        Some(path) => OutputTarget::Export {
            path: path.clone(),
            width: args.width,
            height: args.height,
        },
        None if args.ascii || !stdout_is_terminal => OutputTarget::Ascii {
            cols: args.cols,
            rows: args.rows,
        },
        None => OutputTarget::Interactive,
    };

    CdfConfig {
        datafiles: args.datafiles.clone(),
        labels: args.labels.clone().unwrap_or_default(),
        column: args.column,
        method: args.method,
        xlabel: args.xlabel.clone(),
        ylabel: args.ylabel.clone(),
        title: args.title.clone(),
        caption: args.caption.clone(),
        output,
        export_curves: args.export_curves.clone(),
    }
}

fn render(config: &CdfConfig, output: &pipeline::RunOutput) -> Result<(), AppError> {
    let text = ChartText::from_config(config);

    match &config.output {
        OutputTarget::Interactive => crate::tui::run(output, text),
        OutputTarget::Ascii { cols, rows } => {
            let chart = crate::plot::render_ascii_chart(&output.series, output.bounds, text, *cols, *rows);
            println!("{chart}");
            Ok(())
        }
        OutputTarget::Export { path, width, height } => {
            crate::io::export::export_chart(path, (*width, *height), &output.series, output.bounds, text)
        }
    }
}
