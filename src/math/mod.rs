//! Numeric utilities: CDF construction and descriptive statistics.

pub mod cdf;
pub mod descriptive;

pub use cdf::*;
pub use descriptive::*;
