use crate::ledger::{Transaction, TransactionType};

/// Income and expense totals over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
}

impl Summary {
    /// Net savings: income minus expenses.
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Expense totals keyed by category, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest category total, or `None` when there are no expenses.
    pub fn max(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|(_, total)| *total)
            .reduce(f64::max)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Sums income and expense amounts. Transactions of any other type are ignored.
    pub fn summarize(transactions: &[Transaction]) -> Summary {
        transactions
            .iter()
            .fold(Summary::default(), |mut summary, txn| {
                match txn.kind {
                    TransactionType::Income => summary.income += txn.amount,
                    TransactionType::Expense => summary.expenses += txn.amount,
                    TransactionType::Other(_) => {}
                }
                summary
            })
    }

    /// Sums expense amounts per category. Categories with no expense are absent.
    pub fn expenses_by_category(transactions: &[Transaction]) -> CategoryTotals {
        let mut totals = CategoryTotals::default();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            totals.add(&txn.category, txn.amount);
        }
        totals
    }
}
