//! Built-in demo ledger served when no record file is configured.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::record::{FinancialRecord, RecordStatus, RecordType};

struct SeedRow {
    id: &'static str,
    record_type: RecordType,
    party: &'static str,
    amount: i64,
    due: (i32, u32, u32),
    status: RecordStatus,
    invoice_number: &'static str,
}

fn rows() -> [SeedRow; 7] {
    [
        SeedRow {
            id: "FIN001",
            record_type: RecordType::Receivable,
            party: "Green Grocery Mart",
            amount: 6750,
            due: (2026, 3, 1),
            status: RecordStatus::Pending,
            invoice_number: "INV-001",
        },
        SeedRow {
            id: "FIN002",
            record_type: RecordType::Receivable,
            party: "Farm to Table Co-op",
            amount: 8000,
            due: (2026, 2, 24),
            status: RecordStatus::Overdue,
            invoice_number: "INV-002",
        },
        SeedRow {
            id: "FIN003",
            record_type: RecordType::Receivable,
            party: "Fresh Express Supermarket",
            amount: 5500,
            due: (2026, 2, 28),
            status: RecordStatus::Paid,
            invoice_number: "INV-003",
        },
        SeedRow {
            id: "FIN004",
            record_type: RecordType::Payable,
            party: "Fresh Farms Co.",
            amount: 16000,
            due: (2026, 3, 8),
            status: RecordStatus::Pending,
            invoice_number: "BILL-001",
        },
        SeedRow {
            id: "FIN005",
            record_type: RecordType::Payable,
            party: "Green Leaf Suppliers",
            amount: 8400,
            due: (2026, 3, 5),
            status: RecordStatus::Pending,
            invoice_number: "BILL-002",
        },
        SeedRow {
            id: "FIN006",
            record_type: RecordType::Payable,
            party: "Bulk Veggie Mart",
            amount: 20000,
            due: (2026, 3, 1),
            status: RecordStatus::Paid,
            invoice_number: "BILL-003",
        },
        SeedRow {
            id: "FIN007",
            record_type: RecordType::Receivable,
            party: "Corner Store 24/7",
            amount: 2065,
            due: (2026, 3, 5),
            status: RecordStatus::Pending,
            invoice_number: "INV-004",
        },
    ]
}

pub fn seed_records() -> Vec<FinancialRecord> {
    rows()
        .into_iter()
        .filter_map(|row| {
            let (y, m, d) = row.due;
            // all seed dates are valid calendar dates
            let due_date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(FinancialRecord {
                id: row.id.to_string(),
                record_type: row.record_type,
                party: row.party.to_string(),
                amount: Decimal::from(row.amount),
                due_date,
                status: row.status,
                invoice_number: row.invoice_number.to_string(),
            })
        })
        .collect()
}
