//! Session state for one run of the shell.

use std::io;

use crate::{
    config::Config,
    core::{
        clock::{Clock, SystemClock},
        ledger_manager::LedgerManager,
    },
    storage::CsvStore,
};

use super::{
    io::{InteractivePrompter, Prompter, ScriptPrompter},
    output::{self, OutputPreferences},
    CliError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub ledger_manager: LedgerManager,
    pub clock: Box<dyn Clock>,
    pub prompter: Box<dyn Prompter>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(
        mode: CliMode,
        ledger_manager: LedgerManager,
        clock: Box<dyn Clock>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            mode,
            ledger_manager,
            clock,
            prompter,
            running: true,
        }
    }

    /// Loads the ledger from the configured data file and wires the prompter
    /// matching the configured mode.
    pub fn from_config(config: &Config) -> Result<Self, CliError> {
        output::set_preferences(OutputPreferences {
            plain_mode: config.mode == CliMode::Script,
        });

        let storage = CsvStore::new(&config.data_file);
        let ledger_manager = LedgerManager::load(Box::new(storage))?;
        let prompter: Box<dyn Prompter> = match config.mode {
            CliMode::Interactive => Box::new(InteractivePrompter::new()?),
            CliMode::Script => Box::new(ScriptPrompter::new(io::stdin().lock())),
        };

        Ok(Self::new(
            config.mode,
            ledger_manager,
            Box::new(SystemClock),
            prompter,
        ))
    }
}
