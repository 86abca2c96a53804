//! CSV file record adapter.
//!
//! The file is read once when the provider is built; afterwards every call to
//! [`RecordProvider::records`] returns the same snapshot. Rows that cannot be
//! turned into a [`FinancialRecord`] are skipped and remembered as
//! [`MalformedRecord`]s rather than failing the load.

use crate::domain::error::FinanceError;
use crate::domain::record::{FinancialRecord, RecordStatus, RecordType};
use crate::ports::record_provider::RecordProvider;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const COLUMNS: [&str; 7] = [
    "id",
    "type",
    "party",
    "amount",
    "dueDate",
    "status",
    "invoiceNumber",
];

/// A data row that was excluded from the record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line in the source file, header included.
    pub line: u64,
    pub reason: String,
}

#[derive(Debug)]
pub struct CsvRecordProvider {
    source: String,
    records: Vec<FinancialRecord>,
    skipped: Vec<MalformedRecord>,
}

impl CsvRecordProvider {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FinanceError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let content = fs::read(&path).map_err(|e| FinanceError::DataSource {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_reader(content.as_slice(), path.display().to_string())
    }

    pub fn from_reader<R: Read>(reader: R, source: impl Into<String>) -> Result<Self, FinanceError> {
        let source = source.into();
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(|e| FinanceError::DataSource {
            reason: format!("CSV header error in {}: {}", source, e),
        })?;
        let positions = column_positions(headers).map_err(|reason| FinanceError::DataSource {
            reason: format!("{}: {}", source, reason),
        })?;

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        let mut totals = RunningTotals::default();

        for (index, result) in rdr.records().enumerate() {
            let fallback_line = index as u64 + 2;
            let parsed = match result {
                Ok(row) => {
                    let line = row.position().map(|p| p.line()).unwrap_or(fallback_line);
                    parse_row(&row, &positions)
                        .and_then(|record| totals.admit(&record).map(|()| record))
                        .map_err(|reason| MalformedRecord { line, reason })
                }
                Err(e) => Err(MalformedRecord {
                    line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                    reason: format!("CSV parse error: {}", e),
                }),
            };

            match parsed {
                Ok(record) => records.push(record),
                Err(malformed) => {
                    tracing::warn!(
                        source = %source,
                        line = malformed.line,
                        reason = %malformed.reason,
                        "skipping malformed record"
                    );
                    skipped.push(malformed);
                }
            }
        }

        tracing::debug!(
            source = %source,
            loaded = records.len(),
            skipped = skipped.len(),
            "loaded records from CSV"
        );

        Ok(Self {
            source,
            records,
            skipped,
        })
    }

    pub fn skipped(&self) -> &[MalformedRecord] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordProvider for CsvRecordProvider {
    fn records(&self) -> Result<Vec<FinancialRecord>, FinanceError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} ({} records, {} skipped)", self.source, self.records.len(), self.skipped.len())
    }
}

/// Per-type totals of the rows accepted so far. A row is only admitted when
/// its type's total still fits in a `Decimal`, so summing the loaded records
/// can never overflow.
#[derive(Debug, Default)]
struct RunningTotals {
    receivable: Decimal,
    payable: Decimal,
}

impl RunningTotals {
    fn admit(&mut self, record: &FinancialRecord) -> Result<(), String> {
        let total = match record.record_type {
            RecordType::Receivable => &mut self.receivable,
            RecordType::Payable => &mut self.payable,
            RecordType::Other(_) => return Ok(()),
        };
        *total = total
            .checked_add(record.amount)
            .ok_or_else(|| format!("amount overflows ledger total: {}", record.amount))?;
        Ok(())
    }
}

fn column_positions(headers: &csv::StringRecord) -> Result<[usize; 7], String> {
    let mut positions = [0usize; 7];
    for (slot, name) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("missing {} column", name))?;
    }
    Ok(positions)
}

fn field<'a>(
    row: &'a csv::StringRecord,
    positions: &[usize; 7],
    index: usize,
) -> Result<&'a str, String> {
    match row.get(positions[index]) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("missing {}", COLUMNS[index])),
    }
}

fn parse_row(row: &csv::StringRecord, positions: &[usize; 7]) -> Result<FinancialRecord, String> {
    let amount = Decimal::from_str(field(row, positions, 3)?)
        .map_err(|e| format!("invalid amount: {}", e))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(format!("negative amount: {}", amount));
    }

    let due_date = NaiveDate::parse_from_str(field(row, positions, 4)?, "%Y-%m-%d")
        .map_err(|e| format!("invalid dueDate: {}", e))?;

    Ok(FinancialRecord {
        id: field(row, positions, 0)?.to_string(),
        record_type: RecordType::from(field(row, positions, 1)?),
        party: field(row, positions, 2)?.to_string(),
        amount,
        due_date,
        status: RecordStatus::from(field(row, positions, 5)?),
        invoice_number: field(row, positions, 6)?.to_string(),
    })
}
