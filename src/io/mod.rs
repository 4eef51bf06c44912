//! Persistence of walk results

pub mod report;
