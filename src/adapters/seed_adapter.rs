//! In-memory provider over the built-in seed ledger.

use crate::domain::error::FinanceError;
use crate::domain::record::FinancialRecord;
use crate::domain::seed::seed_records;
use crate::ports::record_provider::RecordProvider;

pub struct SeedRecordProvider {
    records: Vec<FinancialRecord>,
}

impl SeedRecordProvider {
    pub fn new() -> Self {
        Self {
            records: seed_records(),
        }
    }
}

impl Default for SeedRecordProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordProvider for SeedRecordProvider {
    fn records(&self) -> Result<Vec<FinancialRecord>, FinanceError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("built-in seed ledger ({} records)", self.records.len())
    }
}
