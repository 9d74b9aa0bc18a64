//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - run configuration (`CdfConfig`, `CdfMethod`, `OutputTarget`)
//! - loaded samples and their summary (`SampleSet`, `SampleStats`)
//! - computed outputs (`CdfCurve`, `Series`, `ChartBounds`)

pub mod types;

pub use types::*;
