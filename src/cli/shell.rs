use crate::config::Config;
use crate::core::services::{SummaryService, TransactionService};
use crate::ledger::TransactionType;

use super::output;
use super::presenter;
use super::shell_context::ShellContext;
use super::CliError;

const MENU_TITLE: &str = "Personal Budget Tracker";
const CHOICE_PROMPT: &str = "Choose an option";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// The six menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddIncome,
    AddExpense,
    ViewSummary,
    VisualizeExpenses,
    ClearAll,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddIncome,
        MenuAction::AddExpense,
        MenuAction::ViewSummary,
        MenuAction::VisualizeExpenses,
        MenuAction::ClearAll,
        MenuAction::Exit,
    ];

    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuAction::AddIncome),
            "2" => Some(MenuAction::AddExpense),
            "3" => Some(MenuAction::ViewSummary),
            "4" => Some(MenuAction::VisualizeExpenses),
            "5" => Some(MenuAction::ClearAll),
            "6" => Some(MenuAction::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddIncome => "Add Income",
            MenuAction::AddExpense => "Add Expense",
            MenuAction::ViewSummary => "View Summary",
            MenuAction::VisualizeExpenses => "Visualize Expenses",
            MenuAction::ClearAll => "Clear All Data",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Runs the shell against the fixed data file, in the mode chosen by the environment.
pub fn run_cli() -> Result<(), CliError> {
    let config = Config::from_env();
    let mut context = ShellContext::from_config(&config)?;
    run_loop(&mut context)
}

/// Menu loop: prompt, dispatch, repeat until exit or end of input.
pub fn run_loop(context: &mut ShellContext) -> Result<(), CliError> {
    while context.running {
        print_menu();
        let line = match context.prompter.read_choice(CHOICE_PROMPT)? {
            Some(line) => line,
            None => {
                output::info("Exiting...");
                break;
            }
        };

        // Only the line terminator is dropped; " 1 " is not a valid choice.
        let choice = line.trim_end_matches(['\r', '\n']);
        if handle_choice(context, choice)? == LoopControl::Exit {
            context.running = false;
        }
    }
    Ok(())
}

fn print_menu() {
    output::section(MENU_TITLE);
    for (index, action) in MenuAction::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, action.label());
    }
}

pub(crate) fn handle_choice(
    context: &mut ShellContext,
    choice: &str,
) -> Result<LoopControl, CliError> {
    let Some(action) = MenuAction::from_input(choice) else {
        tracing::debug!(choice, "unrecognised menu choice");
        output::warning("Invalid option. Please try again.");
        return Ok(LoopControl::Continue);
    };

    tracing::debug!(?action, "dispatching menu action");
    match action {
        MenuAction::AddIncome => add_transaction(context, TransactionType::Income)?,
        MenuAction::AddExpense => add_transaction(context, TransactionType::Expense)?,
        MenuAction::ViewSummary => {
            let summary = SummaryService::summarize(context.ledger_manager.transactions());
            presenter::print_summary(&summary);
        }
        MenuAction::VisualizeExpenses => {
            let totals =
                SummaryService::expenses_by_category(context.ledger_manager.transactions());
            presenter::show_expenses(&totals, context.mode)?;
        }
        MenuAction::ClearAll => {
            context.ledger_manager.clear()?;
            output::success("All data has been cleared.");
        }
        MenuAction::Exit => {
            output::info("Exiting...");
            return Ok(LoopControl::Exit);
        }
    }
    Ok(LoopControl::Continue)
}

fn add_transaction(context: &mut ShellContext, kind: TransactionType) -> Result<(), CliError> {
    let (category_prompt, confirmation) = match kind {
        TransactionType::Income => ("Enter income category", "Income added successfully."),
        _ => ("Enter expense category", "Expense added successfully."),
    };

    let category = context.prompter.read_field(category_prompt)?;
    let description = context.prompter.read_field("Enter description")?;
    let amount = context.prompter.read_field("Enter amount")?;

    TransactionService::record(
        &mut context.ledger_manager,
        context.clock.as_ref(),
        kind,
        &category,
        &description,
        &amount,
    )?;
    output::success(confirmation);
    Ok(())
}
