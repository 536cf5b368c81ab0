use crate::cli::io as cli_io;
use crate::cli::output;

/// Commands reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetIncome,
    AddExpense,
    ListExpenses,
    ShowSummary,
    Exit,
}

struct MenuEntry {
    label: &'static str,
    choice: MenuChoice,
}

/// The numbered main menu rendered between commands.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                label: "Enter Monthly Income",
                choice: MenuChoice::SetIncome,
            },
            MenuEntry {
                label: "Add New Expense",
                choice: MenuChoice::AddExpense,
            },
            MenuEntry {
                label: "View All Expenses",
                choice: MenuChoice::ListExpenses,
            },
            MenuEntry {
                label: "View Budget Summary",
                choice: MenuChoice::ShowSummary,
            },
            MenuEntry {
                label: "Exit Program",
                choice: MenuChoice::Exit,
            },
        ];
        Self { entries }
    }

    pub fn render(&self) {
        output::section("Main Menu");
        for (index, entry) in self.entries.iter().enumerate() {
            cli_io::print_info(format!("{}. {}", index + 1, entry.label));
        }
    }

    /// Maps a typed selection onto a command. `None` for anything outside
    /// the numbered range, which callers answer with a re-prompt.
    pub fn choice(&self, input: &str) -> Option<MenuChoice> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.choice)
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
