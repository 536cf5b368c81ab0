//! The interactive menu loop and its command handlers.

use std::io::{self, BufRead};

use crate::cli::io as cli_io;
use crate::cli::menus::{MainMenu, MenuChoice};
use crate::cli::output;
use crate::cli::prompts::{self, IncomePromptResult};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::{format_amount, format_percent};
use crate::cli::ui::table::{Alignment, Table, TableColumn};
use crate::core::services::{BudgetService, BudgetSummary, Recommendation};
use crate::domain::expense::Expense;
use crate::errors::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), SessionError> {
    let stdin = io::stdin();
    let mut context = ShellContext::new();
    run_session(&mut context, &mut stdin.lock())
}

/// Drives the menu loop until the user exits or the input stream closes.
/// Closed input anywhere ends the session cleanly.
pub fn run_session<R: BufRead>(
    context: &mut ShellContext,
    reader: &mut R,
) -> Result<(), SessionError> {
    output::section("Personal Budget Tracker");

    let menu = MainMenu::new();
    while context.running {
        menu.render();
        cli_io::ask("\nEnter your choice (1-5): ")?;
        let Some(line) = prompts::read_line(reader)? else {
            break;
        };
        match menu.choice(&line) {
            Some(choice) => {
                if dispatch(context, reader, choice)? == LoopControl::Exit {
                    break;
                }
            }
            None => cli_io::print_warning("Invalid choice. Please select 1-5."),
        }
    }
    Ok(())
}

fn dispatch<R: BufRead>(
    context: &mut ShellContext,
    reader: &mut R,
    choice: MenuChoice,
) -> Result<LoopControl, SessionError> {
    match choice {
        MenuChoice::SetIncome => set_income(context, reader),
        MenuChoice::AddExpense => add_expense(context, reader),
        MenuChoice::ListExpenses => {
            list_expenses(context);
            Ok(LoopControl::Continue)
        }
        MenuChoice::ShowSummary => {
            show_summary(context);
            Ok(LoopControl::Continue)
        }
        MenuChoice::Exit => {
            cli_io::print_info("Thank you for using Budget Tracker. Goodbye!");
            context.running = false;
            Ok(LoopControl::Exit)
        }
    }
}

fn set_income<R: BufRead>(
    context: &mut ShellContext,
    reader: &mut R,
) -> Result<LoopControl, SessionError> {
    match prompts::prompt_income(reader)? {
        IncomePromptResult::Value(value) => {
            context.set_income(value);
            tracing::debug!(income = value, "monthly income updated");
            cli_io::print_success(format!("Income set to: {}", format_amount(value)));
        }
        IncomePromptResult::Clamped => context.set_income(0.0),
        IncomePromptResult::Keep => {}
        IncomePromptResult::Cancel => return Ok(LoopControl::Exit),
    }
    Ok(LoopControl::Continue)
}

fn add_expense<R: BufRead>(
    context: &mut ShellContext,
    reader: &mut R,
) -> Result<LoopControl, SessionError> {
    output::section("Add New Expense");

    let Some(date) = prompts::prompt_text(reader, "Enter date (MM/DD): ")? else {
        return Ok(LoopControl::Exit);
    };
    let Some(description) = prompts::prompt_text(reader, "Enter description: ")? else {
        return Ok(LoopControl::Exit);
    };
    let Some(amount) = prompts::prompt_amount(reader)? else {
        return Ok(LoopControl::Exit);
    };
    let Some(category) = prompts::prompt_category(reader)? else {
        return Ok(LoopControl::Exit);
    };

    match Expense::new(date, description, amount, category) {
        Ok(expense) => {
            tracing::debug!(amount, category = %category, "expense recorded");
            context.record_expense(expense);
            cli_io::print_success("Expense added successfully.");
        }
        Err(err) => cli_io::print_error(err),
    }
    Ok(LoopControl::Continue)
}

fn list_expenses(context: &ShellContext) {
    output::section("All Expenses");
    if context.ledger().is_empty() {
        cli_io::print_info("No expenses recorded yet.");
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Description", Alignment::Left).with_max_width(24),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Category", Alignment::Left),
    ]);
    for expense in context.ledger().all() {
        table.push_row(vec![
            expense.date().to_string(),
            expense.description().to_string(),
            format_amount(expense.amount()),
            expense.category().to_string(),
        ]);
    }
    println!("{}", table.render());
    println!("{}", table.rule());

    let total = BudgetService::total_expenses(context.ledger());
    cli_io::print_info(format!("Total Expenses: {}", format_amount(total)));
}

fn show_summary(context: &ShellContext) {
    if !context.income_is_set() {
        cli_io::print_warning("Please enter your monthly income first (Option 1).");
        return;
    }

    output::section("Budget Summary");
    if context.ledger().is_empty() {
        cli_io::print_info("No expenses recorded yet.");
        print_totals(context.income(), 0.0, context.income());
        return;
    }

    let summary = BudgetService::summarize(context.income(), context.ledger());
    render_summary(&summary);
    output::separator();
}

fn print_totals(income: f64, total: f64, balance: f64) {
    cli_io::print_info(format!("Monthly Income:  {:>12}", format_amount(income)));
    cli_io::print_info(format!("Total Expenses:  {:>12}", format_amount(total)));
    cli_io::print_info(format!("Balance:         {:>12}", format_amount(balance)));
}

fn render_summary(summary: &BudgetSummary) {
    print_totals(summary.income, summary.total_expenses, summary.balance);
    if summary.balance < 0.0 {
        cli_io::print_warning(format!(
            "Expenses exceed income by {}.",
            format_amount(summary.balance.abs())
        ));
    }

    if !summary.per_category.is_empty() {
        output::section("Expenses by Category");
        for spend in &summary.per_category {
            cli_io::print_info(format!(
                "{:<15} {:>10}  ({:>6})",
                spend.category.label(),
                format_amount(spend.total),
                format_percent(spend.percent_of_expenses)
            ));
        }
    }

    if let Some(highest) = &summary.highest {
        cli_io::print_info(format!(
            "Highest spending: {} ({}, {} of expenses)",
            highest.category,
            format_amount(highest.total),
            format_percent(highest.percent_of_expenses)
        ));
    }

    if let Some(recommendation) = &summary.recommendation {
        output::section("Recommendations");
        render_recommendation(recommendation);
    }
}

fn render_recommendation(recommendation: &Recommendation) {
    match recommendation {
        Recommendation::ReduceSpending { focus, deficit } => {
            cli_io::print_info("- You are spending more than you earn.");
            cli_io::print_info(format!(
                "- Focus on reducing expenses in the {focus} category."
            ));
            cli_io::print_info(format!(
                "- Reduce spending by {} or increase income.",
                format_amount(*deficit)
            ));
        }
        Recommendation::RaiseSavingsRate { spend_ratio } => {
            cli_io::print_info(format!(
                "- You are spending {} of your income.",
                format_percent(*spend_ratio)
            ));
            cli_io::print_info("- Consider increasing your savings rate.");
        }
        Recommendation::OnTrack {
            savings_rate,
            diversify,
        } => {
            cli_io::print_info(format!(
                "- Good job! You are saving {} of your income.",
                format_percent(*savings_rate)
            ));
            if *diversify {
                cli_io::print_info("- Consider spreading spending across more categories.");
            }
        }
    }
}
