use std::fs::File;
use std::io::{self, Write};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tolls::records::{ProcessedToll, RawToll};
use crate::tolls::totals::TollTotal;

#[derive(Debug, Error)]
pub enum DataError {
    /// The input file does not exist. Kept separate from the format errors
    /// so callers can report "file not found" rather than "bad format".
    #[error("file not found: {path}")]
    SourceNotFound { path: String },
    #[error("failed to read or write records")]
    Io(#[from] io::Error),
    #[error("malformed input row")]
    Csv(#[from] csv::Error),
}

/// One row of the export as the toll operator writes it.
#[derive(Debug, Deserialize)]
pub struct TollRecord {
    #[serde(rename = "POSTING DATE")]
    pub posting_date: String,
    #[serde(rename = "TRANSACTION DATE")]
    pub transaction_date: String,
    #[serde(rename = "TAG/PLATE NUMBER")]
    pub tag: String,
    #[serde(rename = "AMOUNT")]
    pub amount: String,
}

impl From<TollRecord> for RawToll {
    fn from(record: TollRecord) -> Self {
        RawToll {
            posting_date: record.posting_date,
            transaction_date: record.transaction_date,
            tag: record.tag,
            amount: record.amount,
        }
    }
}

/// Output row for the cleaned export, amount as a plain decimal number.
#[derive(Debug, Serialize)]
pub struct ProcessedRecord {
    #[serde(rename = "Posting Date")]
    pub posting_date: String,
    #[serde(rename = "Transaction Date")]
    pub transaction_date: String,
    #[serde(rename = "Tag or Plate Number")]
    pub tag: String,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

impl From<&ProcessedToll> for ProcessedRecord {
    fn from(toll: &ProcessedToll) -> Self {
        ProcessedRecord {
            posting_date: toll.posting_date().clone(),
            transaction_date: toll.transaction_date().clone(),
            tag: toll.tag().clone(),
            owner: toll.owner().clone(),
            amount: *toll.amount(),
        }
    }
}

/// Display row for the per-owner totals, tags joined into one string.
#[derive(Debug, Serialize)]
pub struct TotalRecord {
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

impl From<&TollTotal> for TotalRecord {
    fn from(total: &TollTotal) -> Self {
        TotalRecord {
            owner: total.owner().clone(),
            tags: total.joined_tags(),
            amount: *total.amount(),
        }
    }
}

/// Reads the toll export at `file_path` into raw records, preserving file
/// order. Every row must carry all four columns; a malformed row fails the
/// whole import rather than being skipped.
pub fn import_csv(file_path: &str) -> Result<Vec<RawToll>, DataError> {
    let file = File::open(file_path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DataError::SourceNotFound {
            path: file_path.to_owned(),
        },
        _ => DataError::Io(err),
    })?;

    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut records = Vec::new();
    for record in csv_reader.deserialize::<TollRecord>() {
        records.push(record?.into());
    }

    Ok(records)
}

/// Writes the cleaned export.
pub fn export_csv<W: Write>(records: &[ProcessedToll], writer: W) -> Result<(), DataError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for record in records {
        let record: ProcessedRecord = record.into();
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;

    Ok(())
}

/// Writes the per-owner totals as CSV, for display.
pub fn write_totals<W: Write>(totals: &[TollTotal], writer: W) -> Result<(), DataError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for total in totals {
        let record: TotalRecord = total.into();
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;

    Ok(())
}
