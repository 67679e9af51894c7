pub mod chart;
pub mod io;
pub mod output;
pub mod presenter;
mod shell;
pub mod shell_context;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::{core::services::ServiceError, errors::LedgerError};

pub use shell::{run_cli, run_loop, MenuAction};
pub use shell_context::{CliMode, ShellContext};

/// User-facing error raised by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}
