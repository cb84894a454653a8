//! Terminal output formatting
//!
//! Display utilities for the game and the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_generate_result, print_score_result};
