use std::{
    env,
    io::{self, IsTerminal},
    path::PathBuf,
};

use crate::cli::CliMode;

/// File holding the persisted transactions, relative to the working directory.
pub const DATA_FILE: &str = "data.csv";

/// Setting this variable (to any value) forces script mode even on a terminal.
pub const SCRIPT_ENV: &str = "BUDGET_TRACKER_CLI_SCRIPT";

/// Tracing directive applied when `RUST_LOG` does not override it.
pub const DEFAULT_LOG_DIRECTIVE: &str = "budget_tracker=warn";

/// Runtime settings for one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub mode: CliMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE),
            mode: CliMode::Interactive,
        }
    }
}

impl Config {
    /// Picks the shell mode from the environment. The data file is always `DATA_FILE`.
    pub fn from_env() -> Self {
        let mode = resolve_mode(env::var_os(SCRIPT_ENV).is_some(), io::stdin().is_terminal());
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_data_file(data_file: impl Into<PathBuf>, mode: CliMode) -> Self {
        Self {
            data_file: data_file.into(),
            mode,
        }
    }
}

/// Script mode when forced, or when stdin is piped rather than a terminal.
pub fn resolve_mode(script_requested: bool, stdin_is_terminal: bool) -> CliMode {
    if script_requested || !stdin_is_terminal {
        CliMode::Script
    } else {
        CliMode::Interactive
    }
}
