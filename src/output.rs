//! Section headers and colored status output.
//!
//! Headers separate build stages in the console log. They are written to any
//! `std::io::Write` sink so progress output can be captured instead of going
//! straight to stdout.

use crate::config::Config;
use crate::constants::{HEADER_COLOR, HEADER_PADDING, HEADER_RESET};
use crate::sync::SyncOutcome;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Renders a header block for `text`.
///
/// The color sequence sits on its own line before the first border and the
/// reset on its own line after the last one:
///
/// ```text
/// \x1b[01;31m
/// =============
/// == Example ==
/// =============
/// \x1b[0m
/// ```
#[must_use]
pub fn format_header(text: &str) -> String {
    let border = "=".repeat(text.chars().count() + HEADER_PADDING);
    format!("{HEADER_COLOR}\n{border}\n== {text} ==\n{border}\n{HEADER_RESET}\n")
}

/// Writes a header block for `text` to `out`.
pub fn write_header<W: Write + ?Sized>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(format_header(text).as_bytes())?;
    out.flush()
}

/// Prints a header block for `text` to stdout.
pub fn print_header(text: &str) {
    print!("{}", format_header(text));
}

pub fn print_ignore_written(dir: &Path, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "Ignoring contents of".cyan(),
        dir.display().to_string().white().bold()
    );
}

pub fn print_sync_outcome(outcome: &SyncOutcome, config: &Config) {
    if config.is_quiet() {
        return;
    }
    let path = outcome.path().display().to_string();
    match outcome {
        SyncOutcome::Cloned(_) => {
            println!("{} cloned into {}", "✓".green(), path.white().bold())
        }
        SyncOutcome::Updated(_) => {
            println!("{} rebased {}", "✓".green(), path.white().bold())
        }
        SyncOutcome::Skipped(_) => println!(
            "{}",
            format!("{} already present, skipping update", path).dimmed()
        ),
    }
}
