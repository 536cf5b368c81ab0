pub mod category;
pub mod expense;
pub mod ledger;

pub use category::Category;
pub use expense::Expense;
pub use ledger::ExpenseLedger;
