//! Command line surface: argument parsing and summary formatting

pub mod args;
pub mod output;
