//! Drives the full session loop with scripted input and inspects the
//! resulting state.

use std::io::Cursor;

use budget_tracker::cli::shell::run_session;
use budget_tracker::cli::ShellContext;
use budget_tracker::domain::Category;

fn run_script(script: &str) -> ShellContext {
    let mut context = ShellContext::new();
    run_session(&mut context, &mut Cursor::new(script.to_string())).expect("session completes");
    context
}

#[test]
fn income_entry_updates_the_session() {
    let context = run_script("1\n2500\n5\n");
    assert_eq!(context.income(), 2500.0);
}

#[test]
fn negative_income_clamps_to_zero() {
    let context = run_script("1\n-100\n5\n");
    assert_eq!(context.income(), 0.0);
    assert!(!context.income_is_set());
}

#[test]
fn malformed_income_leaves_the_previous_value() {
    let context = run_script("1\n2000\n1\nlots\n5\n");
    assert_eq!(context.income(), 2000.0);
}

#[test]
fn re_entering_income_overwrites_it() {
    let context = run_script("1\n2000\n1\n1800\n5\n");
    assert_eq!(context.income(), 1800.0);
}

#[test]
fn adding_an_expense_appends_to_the_ledger() {
    let context = run_script("2\n07/14\nGroceries\n42.75\n1\n5\n");

    let expenses = context.ledger().all();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].date(), "07/14");
    assert_eq!(expenses[0].description(), "Groceries");
    assert_eq!(expenses[0].amount(), 42.75);
    assert_eq!(expenses[0].category(), Category::Food);
}

#[test]
fn negative_amount_reprompts_before_anything_is_recorded() {
    let context = run_script("2\n07/14\nGroceries\n-5\n42.75\n1\n5\n");

    let expenses = context.ledger().all();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount(), 42.75);
}

#[test]
fn out_of_range_category_reprompts_before_anything_is_recorded() {
    let context = run_script("2\n07/14\nBus pass\n2.40\n9\n2\n5\n");

    let expenses = context.ledger().all();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].category(), Category::Transportation);
}

#[test]
fn invalid_menu_selections_keep_the_session_alive() {
    let context = run_script("9\nhelp\n1\n750\n5\n");
    assert_eq!(context.income(), 750.0);
    assert!(context.ledger().is_empty());
}

#[test]
fn closed_input_ends_the_session_cleanly() {
    // No exit command: the stream just runs dry after the income entry.
    let context = run_script("1\n100\n");
    assert_eq!(context.income(), 100.0);
}

#[test]
fn closed_input_mid_expense_records_nothing() {
    let context = run_script("2\n07/14\nGroceries\n");
    assert!(context.ledger().is_empty());
}
