//! Financial record representation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the ledger a record sits on.
///
/// Values outside the known set are kept verbatim in `Other` so they survive
/// a round trip through the `records` output, but they never match a
/// receivable or payable filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    Receivable,
    Payable,
    Other(String),
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Receivable" => Self::Receivable,
            "Payable" => Self::Payable,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::Receivable => "Receivable".to_string(),
            RecordType::Payable => "Payable".to_string(),
            RecordType::Other(s) => s,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receivable => write!(f, "Receivable"),
            Self::Payable => write!(f, "Payable"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Lifecycle state of a record. Payables normally never go `Overdue`, but
/// nothing upstream enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordStatus {
    Pending,
    Overdue,
    Paid,
    Other(String),
}

impl From<String> for RecordStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => Self::Pending,
            "Overdue" => Self::Overdue,
            "Paid" => Self::Paid,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for RecordStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RecordStatus> for String {
    fn from(value: RecordStatus) -> Self {
        match value {
            RecordStatus::Pending => "Pending".to_string(),
            RecordStatus::Overdue => "Overdue".to_string(),
            RecordStatus::Paid => "Paid".to_string(),
            RecordStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Paid => write!(f, "Paid"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub party: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: RecordStatus,
    pub invoice_number: String,
}

impl FinancialRecord {
    pub fn is_receivable(&self) -> bool {
        self.record_type == RecordType::Receivable
    }

    pub fn is_payable(&self) -> bool {
        self.record_type == RecordType::Payable
    }
}
