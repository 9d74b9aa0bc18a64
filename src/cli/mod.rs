//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! pipeline; `app::config_from_args` turns the parsed `Cli` into a `CdfConfig`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::CdfMethod;

/// Make a CDF graph from data in external files.
#[derive(Debug, Parser, Clone)]
#[command(name = "cdfplot", version, about = "Make a CDF graph from data in external files")]
pub struct Cli {
    /// File(s) containing data, one record per line.
    #[arg(required = true, value_name = "DATAFILE")]
    pub datafiles: Vec<PathBuf>,

    /// Label of each datafile (missing ones become data0, data1, ...).
    #[arg(long, num_args = 1.., value_name = "LABEL")]
    pub labels: Option<Vec<String>>,

    /// Column index (0-based, whitespace-separated) containing the data to plot.
    #[arg(long, default_value_t = 0)]
    pub column: usize,

    /// How the CDF curve is built from the samples.
    #[arg(long, value_enum, default_value_t = CdfMethod::Histogram)]
    pub method: CdfMethod,

    /// Filename of the exported graph image (.svg; .png/.bmp with the `ttf` feature).
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Label of the x axis.
    #[arg(long, default_value = "data")]
    pub xlabel: String,

    /// Label of the y axis.
    #[arg(long, default_value = "CDF")]
    pub ylabel: String,

    /// Title of the graph.
    #[arg(long, default_value = "CDF Graph of Data")]
    pub title: String,

    /// Caption below the graph.
    #[arg(long)]
    pub caption: Option<String>,

    /// Print an ASCII chart to stdout instead of opening the viewer.
    #[arg(long)]
    pub ascii: bool,

    /// Exported image width (pixels).
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Exported image height (pixels).
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// ASCII chart width (columns).
    #[arg(long, default_value_t = 100)]
    pub cols: usize,

    /// ASCII chart height (rows).
    #[arg(long, default_value_t = 25)]
    pub rows: usize,

    /// Also write the computed curves and statistics to JSON.
    #[arg(long = "export-curves", value_name = "JSON")]
    pub export_curves: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::try_parse_from(["cdfplot", "a.txt"]).unwrap();
        assert_eq!(cli.datafiles, vec![PathBuf::from("a.txt")]);
        assert_eq!(cli.labels, None);
        assert_eq!(cli.column, 0);
        assert_eq!(cli.method, CdfMethod::Histogram);
        assert_eq!(cli.xlabel, "data");
        assert_eq!(cli.ylabel, "CDF");
        assert_eq!(cli.title, "CDF Graph of Data");
        assert_eq!(cli.caption, None);
        assert_eq!(cli.export, None);
    }

    #[test]
    fn labels_take_multiple_values() {
        let cli = Cli::try_parse_from([
            "cdfplot", "a.txt", "b.txt", "--labels", "A", "B", "--column", "2",
        ])
        .unwrap();
        assert_eq!(cli.datafiles.len(), 2);
        assert_eq!(cli.labels, Some(vec!["A".to_string(), "B".to_string()]));
        assert_eq!(cli.column, 2);
    }

    #[test]
    fn datafiles_are_required() {
        assert!(Cli::try_parse_from(["cdfplot"]).is_err());
    }

    #[test]
    fn negative_column_is_rejected() {
        assert!(Cli::try_parse_from(["cdfplot", "a.txt", "--column", "-1"]).is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["cdfplot", "-vv", "a.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
