//! The data-line front end.

pub use parser::parse;

pub(crate) use parser::MotifRule;

pub mod error;

mod parser;
