//! Validated line input for the session loop.
//!
//! Every helper is generic over [`BufRead`] so tests can script a whole
//! interaction through an in-memory cursor. `None` (or
//! [`IncomePromptResult::Cancel`]) means the input stream closed.

use std::io::{self, BufRead};

use crate::cli::io as cli_io;
use crate::domain::category::Category;

/// Outcome of the single-attempt income prompt.
///
/// Income entry intentionally differs from expense entry: one attempt only,
/// malformed input keeps the previous value, and a negative value clamps to
/// zero instead of re-prompting.
#[derive(Debug, PartialEq)]
pub enum IncomePromptResult {
    Value(f64),
    Clamped,
    Keep,
    Cancel,
}

/// Reads one line, trimmed. `None` when the stream is exhausted.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if reader.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Prompts for free-form text. No validation; the value is opaque.
pub fn prompt_text<R: BufRead>(reader: &mut R, label: &str) -> io::Result<Option<String>> {
    cli_io::ask(label)?;
    read_line(reader)
}

pub fn prompt_income<R: BufRead>(reader: &mut R) -> io::Result<IncomePromptResult> {
    cli_io::ask("Enter your monthly income: $")?;
    let Some(line) = read_line(reader)? else {
        return Ok(IncomePromptResult::Cancel);
    };
    match line.parse::<f64>() {
        Ok(value) if value < 0.0 => {
            cli_io::print_warning("Income cannot be negative. Setting to $0.00.");
            Ok(IncomePromptResult::Clamped)
        }
        Ok(value) if value.is_finite() => Ok(IncomePromptResult::Value(value)),
        _ => {
            cli_io::print_warning("Invalid input. Income not changed.");
            Ok(IncomePromptResult::Keep)
        }
    }
}

/// Prompts for an expense amount until the input is numeric, finite, and
/// non-negative.
pub fn prompt_amount<R: BufRead>(reader: &mut R) -> io::Result<Option<f64>> {
    loop {
        cli_io::ask("Enter amount: $")?;
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        match line.parse::<f64>() {
            Ok(value) if !value.is_finite() => {
                cli_io::print_warning("Invalid input. Please enter a number.");
            }
            Ok(value) if value < 0.0 => {
                cli_io::print_warning("Amount cannot be negative. Please try again.");
            }
            Ok(value) => return Ok(Some(value)),
            Err(_) => cli_io::print_warning("Invalid input. Please enter a number."),
        }
    }
}

/// Lists the categories and prompts until a 1-based index resolves.
pub fn prompt_category<R: BufRead>(reader: &mut R) -> io::Result<Option<Category>> {
    cli_io::print_info("Select category:");
    for (position, category) in Category::ALL.iter().enumerate() {
        cli_io::print_info(format!("  {}. {}", position + 1, category));
    }
    loop {
        cli_io::ask(format!("Enter category number (1-{}): ", Category::ALL.len()))?;
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        match line.parse::<usize>().ok().and_then(Category::from_index) {
            Some(category) => return Ok(Some(category)),
            None => cli_io::print_warning(format!(
                "Invalid choice. Please enter a number between 1 and {}.",
                Category::ALL.len()
            )),
        }
    }
}
