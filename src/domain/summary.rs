//! Finance dashboard aggregation.
//!
//! [`summarize`] partitions records by type, sums amounts per status, and lays
//! the results out as the fixed chart series the dashboard renders.

use rust_decimal::Decimal;
use serde::Serialize;

use super::record::{FinancialRecord, RecordStatus};

pub const COLOR_GREEN: &str = "#16A34A";
pub const COLOR_AMBER: &str = "#F59E0B";
pub const COLOR_RED: &str = "#EF4444";

/// Headline figures. Pending buckets and payable paid are only carried by the
/// chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_receivable: Decimal,
    pub total_payable: Decimal,
    pub receivable_paid: Decimal,
    pub receivable_overdue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub name: &'static str,
    pub value: Decimal,
    pub color: &'static str,
}

impl ChartEntry {
    fn new(name: &'static str, value: Decimal, color: &'static str) -> Self {
        Self { name, value, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReceivableBreakdown {
    pub paid: Decimal,
    pub pending: Decimal,
    pub overdue: Decimal,
}

impl ReceivableBreakdown {
    pub fn compute(receivables: &[FinancialRecord]) -> Self {
        Self {
            paid: sum_with_status(receivables, &RecordStatus::Paid),
            pending: sum_with_status(receivables, &RecordStatus::Pending),
            overdue: sum_with_status(receivables, &RecordStatus::Overdue),
        }
    }

    /// Collected, Pending, Overdue.
    pub fn chart_data(&self) -> Vec<ChartEntry> {
        vec![
            ChartEntry::new("Collected", self.paid, COLOR_GREEN),
            ChartEntry::new("Pending", self.pending, COLOR_AMBER),
            ChartEntry::new("Overdue", self.overdue, COLOR_RED),
        ]
    }
}

/// Payables have no overdue bucket; an overdue payable lands in neither sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayableBreakdown {
    pub paid: Decimal,
    pub pending: Decimal,
}

impl PayableBreakdown {
    pub fn compute(payables: &[FinancialRecord]) -> Self {
        Self {
            paid: sum_with_status(payables, &RecordStatus::Paid),
            pending: sum_with_status(payables, &RecordStatus::Pending),
        }
    }

    /// Paid, Pending.
    pub fn chart_data(&self) -> Vec<ChartEntry> {
        vec![
            ChartEntry::new("Paid", self.paid, COLOR_GREEN),
            ChartEntry::new("Pending", self.pending, COLOR_AMBER),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub records: Vec<FinancialRecord>,
    pub receivables: Vec<FinancialRecord>,
    pub payables: Vec<FinancialRecord>,
    pub totals: Totals,
    pub receivable_chart_data: Vec<ChartEntry>,
    pub payable_chart_data: Vec<ChartEntry>,
}

pub fn summarize(records: &[FinancialRecord]) -> Summary {
    let receivables: Vec<FinancialRecord> =
        records.iter().filter(|r| r.is_receivable()).cloned().collect();
    let payables: Vec<FinancialRecord> =
        records.iter().filter(|r| r.is_payable()).cloned().collect();

    let receivable = ReceivableBreakdown::compute(&receivables);
    let payable = PayableBreakdown::compute(&payables);

    let totals = Totals {
        total_receivable: sum_amounts(&receivables),
        total_payable: sum_amounts(&payables),
        receivable_paid: receivable.paid,
        receivable_overdue: receivable.overdue,
    };

    Summary {
        records: records.to_vec(),
        receivables,
        payables,
        totals,
        receivable_chart_data: receivable.chart_data(),
        payable_chart_data: payable.chart_data(),
    }
}

// Saturates at Decimal::MAX rather than panicking; providers that admit
// records against running totals never reach it.
fn sum_amounts(records: &[FinancialRecord]) -> Decimal {
    records
        .iter()
        .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.amount))
}

fn sum_with_status(records: &[FinancialRecord], status: &RecordStatus) -> Decimal {
    records
        .iter()
        .filter(|r| &r.status == status)
        .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.amount))
}
