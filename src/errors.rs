use thiserror::Error;

/// Rejections raised while constructing domain values.
#[derive(Debug, Error, PartialEq)]
pub enum ExpenseError {
    #[error("expense amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),
}

/// Error type that captures session loop failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
