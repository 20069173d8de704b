//! Terminal logging and output post-processing.

pub mod log;
pub mod minify;
