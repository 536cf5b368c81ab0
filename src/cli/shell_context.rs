//! Session-scoped state owned by the interactive controller.

use crate::domain::expense::Expense;
use crate::domain::ledger::ExpenseLedger;

/// Mutable session state: the income figure and the expense ledger. The
/// shell owns it exclusively and lends it read-only to the calculator.
pub struct ShellContext {
    income: f64,
    ledger: ExpenseLedger,
    pub running: bool,
}

impl ShellContext {
    pub fn new() -> Self {
        Self {
            income: 0.0,
            ledger: ExpenseLedger::new(),
            running: true,
        }
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    /// Last write wins; no history is kept.
    pub fn set_income(&mut self, income: f64) {
        self.income = income;
    }

    /// Zero income doubles as "not yet set": the summary view stays locked
    /// until a non-zero value is entered, even for a user whose income
    /// really is zero.
    pub fn income_is_set(&self) -> bool {
        self.income != 0.0
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn record_expense(&mut self, expense: Expense) {
        self.ledger.append(expense);
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}
