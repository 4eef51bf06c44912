//! Core services for traversal, filtering, and the actions run on matches

pub mod action;
pub mod filter;
pub mod traverse;
pub mod walk;
