use crate::errors::LedgerError;
use crate::ledger::{Ledger, Transaction};
use crate::storage::RecordStore;

/// Facade that coordinates the session ledger with its record store.
///
/// Every mutation is written through to storage immediately: `append` rewrites
/// the full file and `clear` truncates it.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn RecordStore>,
}

impl LedgerManager {
    /// Builds the session ledger from whatever the store currently holds.
    pub fn load(storage: Box<dyn RecordStore>) -> Result<Self, LedgerError> {
        let transactions = storage.load()?;
        tracing::info!(
            count = transactions.len(),
            path = %storage.path().display(),
            "ledger loaded"
        );
        Ok(Self {
            ledger: Ledger::from_transactions(transactions),
            storage,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn append(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        self.ledger.add_transaction(transaction);
        self.storage.save(self.ledger.transactions())
    }

    pub fn clear(&mut self) -> Result<(), LedgerError> {
        self.storage.clear()?;
        self.ledger.clear();
        tracing::info!(path = %self.storage.path().display(), "ledger cleared");
        Ok(())
    }
}
