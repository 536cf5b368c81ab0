//! A single recorded expense.

use crate::domain::category::Category;
use crate::errors::ExpenseError;

/// One expense entry. Immutable once constructed; the amount invariant is
/// enforced by [`Expense::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    date: String,
    description: String,
    amount: f64,
    category: Category,
}

impl Expense {
    /// Builds an expense. The date and description are accepted as opaque
    /// text; the amount must be finite and non-negative.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> Result<Self, ExpenseError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ExpenseError::InvalidAmount(amount));
        }
        Ok(Self {
            date: date.into(),
            description: description.into(),
            amount,
            category,
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_amounts() {
        assert!(Expense::new("07/01", "Coffee", 0.0, Category::Food).is_ok());
        assert!(Expense::new("07/01", "Coffee", 3.75, Category::Food).is_ok());
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = Expense::new("07/01", "Coffee", -1.0, Category::Food).unwrap_err();
        assert_eq!(err, ExpenseError::InvalidAmount(-1.0));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(Expense::new("07/01", "Coffee", f64::NAN, Category::Food).is_err());
        assert!(Expense::new("07/01", "Coffee", f64::INFINITY, Category::Food).is_err());
    }

    #[test]
    fn date_and_description_are_opaque_text() {
        let expense =
            Expense::new("not a date", "", 1.0, Category::Other).expect("opaque fields accepted");
        assert_eq!(expense.date(), "not a date");
        assert_eq!(expense.description(), "");
    }
}
