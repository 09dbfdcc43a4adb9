//! Formatting functions for UI output.
//!
//! The `format_*` functions are pure; the `display_*` functions print them.

use console::style;

use crate::boundary::BoundaryWarning;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().for_stderr(), message)
}

pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), warning)
}

pub fn format_manual_push_instruction(tag: &str, remote: &str) -> String {
    format!(
        "{} To push this tag later, run:\n  {}",
        style("→").yellow().for_stderr(),
        style(format!("git push {} {}", remote, tag)).cyan().for_stderr()
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a non-fatal warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Show the git command needed to push a tag that stayed local.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    eprintln!("{}", format_manual_push_instruction(tag, remote));
}

/// Print the resulting tag, unstyled, on stdout.
pub fn display_tag(tag: &str) {
    println!("{}", tag);
}
