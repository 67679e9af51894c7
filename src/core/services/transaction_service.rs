//! Business logic helpers for recording transactions.

use crate::core::clock::Clock;
use crate::core::ledger_manager::LedgerManager;
use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Transaction, TransactionType};

/// Builds transactions from raw user input and records them in the ledger.
pub struct TransactionService;

impl TransactionService {
    /// Parses an amount as typed by the user. Surrounding whitespace is ignored.
    pub fn parse_amount(raw: &str) -> ServiceResult<f64> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| ServiceError::Invalid(format!("could not convert `{raw}` to an amount")))
    }

    /// Creates a transaction dated today and appends it, persisting the ledger.
    pub fn record(
        manager: &mut LedgerManager,
        clock: &dyn Clock,
        kind: TransactionType,
        category: &str,
        description: &str,
        raw_amount: &str,
    ) -> ServiceResult<Transaction> {
        let amount = Self::parse_amount(raw_amount)?;
        let transaction = Transaction::new(clock.today(), category, description, amount, kind);
        manager.append(transaction.clone())?;
        tracing::debug!(
            kind = %transaction.kind,
            category = %transaction.category,
            amount = transaction.amount,
            "transaction recorded"
        );
        Ok(transaction)
    }
}
