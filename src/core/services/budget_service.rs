//! Pure aggregation over the session ledger.
//!
//! Every function here is side-effect free and idempotent for the same
//! inputs; the interactive shell owns all state and borrows it for reads.

use crate::domain::category::Category;
use crate::domain::ledger::ExpenseLedger;

/// Spending aggregated for a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: Category,
    pub total: f64,
    /// Share of total expenses, in percent. Only built when the total is
    /// non-zero.
    pub percent_of_expenses: f64,
}

/// Outcome of the three-way spending assessment. Rendering to text is the
/// shell's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Expenses exceed income; `focus` is the highest-spending category.
    ReduceSpending { focus: Category, deficit: f64 },
    /// More than 80% of income is spent; `spend_ratio` is that share in
    /// percent.
    RaiseSavingsRate { spend_ratio: f64 },
    /// Spending is under control; `diversify` is set when one category
    /// holds more than half of all expenses.
    OnTrack { savings_rate: f64, diversify: bool },
}

/// Everything the budget summary view needs, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub per_category: Vec<CategorySpend>,
    pub highest: Option<CategorySpend>,
    pub recommendation: Option<Recommendation>,
}

pub struct BudgetService;

impl BudgetService {
    /// Sum of every recorded amount. An empty ledger yields 0.0.
    pub fn total_expenses(ledger: &ExpenseLedger) -> f64 {
        ledger.all().iter().map(|expense| expense.amount()).sum()
    }

    pub fn balance(income: f64, total: f64) -> f64 {
        income - total
    }

    /// Per-category totals for the categories present in the ledger, in
    /// [`Category::ALL`] declaration order. Categories without expenses are
    /// omitted rather than reported as zero.
    pub fn category_totals(ledger: &ExpenseLedger) -> Vec<(Category, f64)> {
        let mut totals = [0.0_f64; Category::ALL.len()];
        let mut seen = [false; Category::ALL.len()];
        for expense in ledger.all() {
            let slot = expense.category().position();
            totals[slot] += expense.amount();
            seen[slot] = true;
        }
        Category::ALL
            .iter()
            .enumerate()
            .filter(|(slot, _)| seen[*slot])
            .map(|(slot, category)| (*category, totals[slot]))
            .collect()
    }

    /// The category with the strictly greatest total, or `None` when no
    /// totals exist. A candidate replaces the running maximum only when
    /// strictly greater, so ties keep the category declared first in
    /// [`Category::ALL`].
    pub fn highest_category(totals: &[(Category, f64)]) -> Option<(Category, f64)> {
        let mut best: Option<(Category, f64)> = None;
        for &(category, total) in totals {
            let replace = match best {
                None => true,
                Some((_, best_total)) => total > best_total,
            };
            if replace {
                best = Some((category, total));
            }
        }
        best
    }

    /// Share of `amount` against `total`, in percent.
    ///
    /// Undefined for a zero `total`; callers must guard. The summary view
    /// short-circuits empty and zero-total ledgers before getting here.
    pub fn percent_of_total(amount: f64, total: f64) -> f64 {
        debug_assert!(total != 0.0, "percent_of_total requires a non-zero total");
        (amount / total) * 100.0
    }

    /// Selects one of the three mutually exclusive outcomes. Callers
    /// guarantee `income > 0`: the summary view refuses to render before an
    /// income is set.
    pub fn recommendation(
        income: f64,
        total: f64,
        balance: f64,
        highest: &CategorySpend,
    ) -> Recommendation {
        if balance < 0.0 {
            Recommendation::ReduceSpending {
                focus: highest.category,
                deficit: balance.abs(),
            }
        } else if total / income > 0.8 {
            Recommendation::RaiseSavingsRate {
                spend_ratio: (total / income) * 100.0,
            }
        } else {
            Recommendation::OnTrack {
                savings_rate: (balance / income) * 100.0,
                diversify: highest.percent_of_expenses > 50.0,
            }
        }
    }

    /// Aggregates the full summary for the current session.
    ///
    /// When the ledger is empty, or every recorded amount is zero, the
    /// summary carries totals only: no category breakdown, no highest entry,
    /// no recommendation. That short-circuit keeps every percentage division
    /// guarded.
    pub fn summarize(income: f64, ledger: &ExpenseLedger) -> BudgetSummary {
        let total = Self::total_expenses(ledger);
        let balance = Self::balance(income, total);

        if ledger.is_empty() || total == 0.0 {
            return BudgetSummary {
                income,
                total_expenses: total,
                balance,
                per_category: Vec::new(),
                highest: None,
                recommendation: None,
            };
        }

        let totals = Self::category_totals(ledger);
        let per_category: Vec<CategorySpend> = totals
            .iter()
            .map(|&(category, amount)| CategorySpend {
                category,
                total: amount,
                percent_of_expenses: Self::percent_of_total(amount, total),
            })
            .collect();
        let highest = Self::highest_category(&totals).map(|(category, amount)| CategorySpend {
            category,
            total: amount,
            percent_of_expenses: Self::percent_of_total(amount, total),
        });
        let recommendation = highest
            .as_ref()
            .map(|spend| Self::recommendation(income, total, balance, spend));

        BudgetSummary {
            income,
            total_expenses: total,
            balance,
            per_category,
            highest,
            recommendation,
        }
    }
}
