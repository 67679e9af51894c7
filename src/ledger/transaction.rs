use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const INCOME_LABEL: &str = "Income";
const EXPENSE_LABEL: &str = "Expense";

/// Direction of a transaction.
///
/// Only `Income` and `Expense` take part in aggregation. Any other label read
/// from disk is kept verbatim in `Other` so it survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
    Other(String),
}

impl TransactionType {
    pub fn label(&self) -> &str {
        match self {
            TransactionType::Income => INCOME_LABEL,
            TransactionType::Expense => EXPENSE_LABEL,
            TransactionType::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            INCOME_LABEL => TransactionType::Income,
            EXPENSE_LABEL => TransactionType::Expense,
            other => TransactionType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(TransactionType::from_label(&label))
    }
}

/// A single recorded monetary event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount,
            kind,
        }
    }

    pub fn income(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::new(date, category, description, amount, TransactionType::Income)
    }

    pub fn expense(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::new(date, category, description, amount, TransactionType::Expense)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}
