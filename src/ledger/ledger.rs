use super::transaction::Transaction;

/// In-memory, insertion-ordered collection of transactions for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn add_transaction_keeps_insertion_order() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::expense(date, "Rent", "", 500.0));
        ledger.add_transaction(Transaction::income(date, "Salary", "", 3000.0));
        ledger.add_transaction(Transaction::expense(date, "Food", "", 20.0));

        let categories: Vec<_> = ledger
            .transactions()
            .iter()
            .map(|txn| txn.category.as_str())
            .collect();
        assert_eq!(categories, ["Rent", "Salary", "Food"]);
    }
}
