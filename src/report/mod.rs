//! Plain-text reporting of per-file statistics.

pub mod format;

pub use format::*;
