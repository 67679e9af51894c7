use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::{Transaction, TransactionType},
};

use super::{RecordStore, Result};

pub const HEADER: [&str; 5] = ["date", "category", "description", "amount", "type"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const TMP_SUFFIX: &str = "tmp";

/// Row shape as read from disk; numeric and date columns are parsed afterwards
/// so that malformed values surface as row-level parse errors.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    category: String,
    description: String,
    amount: String,
    #[serde(rename = "type")]
    kind: TransactionType,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: String,
    category: &'a str,
    description: &'a str,
    amount: f64,
    kind: &'a TransactionType,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            date: txn.date.format(DATE_FORMAT).to_string(),
            category: &txn.category,
            description: &txn.description,
            amount: txn.amount,
            kind: &txn.kind,
        }
    }
}

impl RawRecord {
    fn into_transaction(self, row: usize) -> Result<Transaction> {
        let amount = self.amount.trim().parse::<f64>().map_err(|_| {
            LedgerError::parse(row, format!("amount `{}` is not a number", self.amount))
        })?;
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            LedgerError::parse(
                row,
                format!("date `{}` is not in YYYY-MM-DD form", self.date),
            )
        })?;
        Ok(Transaction {
            date,
            category: self.category,
            description: self.description,
            amount,
            kind: self.kind,
        })
    }
}

/// Flat-file record store writing one CSV row per transaction.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);
        let mut transactions = Vec::new();
        for (index, record) in reader.deserialize::<RawRecord>().enumerate() {
            let row = index + 1;
            let raw = record?;
            transactions.push(raw.into_transaction(row)?);
        }

        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded transactions"
        );
        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let tmp = tmp_path(&self.path);
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp)?;
            writer.write_record(HEADER)?;
            for txn in transactions {
                writer.serialize(CsvRow::from(txn))?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        File::create(&self.path)?;
        tracing::debug!(path = %self.path.display(), "cleared data file");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
