//! Input/output helpers.
//!
//! - data file ingest (`ingest`)
//! - chart image export (`export`)
//! - curve/statistics JSON export (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
