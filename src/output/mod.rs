//! Terminal output formatting
//!
//! Display utilities for the game loop and command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_simulation_report};
