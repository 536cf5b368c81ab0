use std::fmt;
use std::io::{self, Write};

use crate::cli::output;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Write an inline prompt label and flush, so input lands on the same line.
pub fn ask(label: impl fmt::Display) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()
}
