pub mod csv_backend;

use std::path::Path;

use crate::{errors::LedgerError, ledger::Transaction};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing the transaction list.
pub trait RecordStore {
    /// Reads every persisted transaction in file order. A missing store is empty.
    fn load(&self) -> Result<Vec<Transaction>>;
    /// Replaces the persisted contents with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
    /// Empties the store, leaving a zero-byte file behind.
    fn clear(&self) -> Result<()>;
    fn path(&self) -> &Path;
}

pub use csv_backend::{CsvStore, HEADER};
