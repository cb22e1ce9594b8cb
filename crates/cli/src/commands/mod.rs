//! CLI command implementations.
//!
//! Each command renders its output as a string so it can be tested without
//! capturing stdout.

pub mod catalog;
pub mod orders;
pub mod quote;
