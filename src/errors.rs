use thiserror::Error;

/// Error type that captures common ledger and record store failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error on row {row}: {message}")]
    Parse { row: usize, message: String },
}

impl LedgerError {
    pub(crate) fn parse(row: usize, message: impl Into<String>) -> Self {
        LedgerError::Parse {
            row,
            message: message.into(),
        }
    }
}
