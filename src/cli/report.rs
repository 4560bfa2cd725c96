//! Terminal output helpers shared by the CLI commands.
//!
//! Separate from core logic so glossa can be used as a library without
//! pulling in terminal formatting.

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_failure(message: &str) {
    eprintln!("{} {}", FAILURE_MARK.red(), message.red());
}
