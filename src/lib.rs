//! `cdf-plot` library crate.
//!
//! The binary (`cdfplot`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the CDF pipeline can be reused without any renderer attached

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod tui;
