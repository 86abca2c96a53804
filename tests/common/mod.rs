#![allow(dead_code)]

use chrono::NaiveDate;
use finboard::domain::error::FinanceError;
pub use finboard::domain::record::{FinancialRecord, RecordStatus, RecordType};
use finboard::ports::record_provider::RecordProvider;
use rust_decimal::Decimal;

pub struct MockRecordProvider {
    pub records: Vec<FinancialRecord>,
    pub error: Option<String>,
}

impl MockRecordProvider {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
        }
    }

    pub fn with_record(mut self, record: FinancialRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl RecordProvider for MockRecordProvider {
    fn records(&self) -> Result<Vec<FinancialRecord>, FinanceError> {
        if let Some(reason) = &self.error {
            return Err(FinanceError::DataSource {
                reason: reason.clone(),
            });
        }
        Ok(self.records.clone())
    }
}

pub fn make_record(id: &str, record_type: &str, amount: i64, status: &str) -> FinancialRecord {
    FinancialRecord {
        id: id.to_string(),
        record_type: RecordType::from(record_type),
        party: format!("Party {id}"),
        amount: Decimal::from(amount),
        due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        status: RecordStatus::from(status),
        invoice_number: format!("REF-{id}"),
    }
}

pub const RECORDS_CSV: &str = "\
id,type,party,amount,dueDate,status,invoiceNumber
FIN001,Receivable,Green Grocery Mart,6750,2026-03-01,Pending,INV-001
FIN002,Receivable,Farm to Table Co-op,8000,2026-02-24,Overdue,INV-002
FIN003,Receivable,Fresh Express Supermarket,5500,2026-02-28,Paid,INV-003
FIN004,Payable,Fresh Farms Co.,16000,2026-03-08,Pending,BILL-001
FIN005,Payable,Green Leaf Suppliers,8400,2026-03-05,Pending,BILL-002
FIN006,Payable,Bulk Veggie Mart,20000,2026-03-01,Paid,BILL-003
FIN007,Receivable,Corner Store 24/7,2065,2026-03-05,Pending,INV-004
";
