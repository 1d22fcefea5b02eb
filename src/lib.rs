//! Comparing the motif collections of two NEMO result files.

pub mod collection;
pub mod literal;
pub mod motif;
pub mod reader;
pub mod report;
pub mod types;
