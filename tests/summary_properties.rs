//! Property-based tests for the finance summary.
//!
//! Every generated ledger must satisfy:
//! - partitions plus unclassified records account for every input record
//! - each total equals the sum of its status buckets
//! - chart series sum to their totals
//! - summarizing is deterministic
//! - chart categories never depend on the input

mod common;

use chrono::NaiveDate;
use common::*;
use finboard::domain::summary::{PayableBreakdown, ReceivableBreakdown, summarize};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_type() -> impl Strategy<Value = RecordType> {
    prop_oneof![
        4 => Just(RecordType::Receivable),
        4 => Just(RecordType::Payable),
        1 => "[A-Za-z]{1,8}".prop_map(RecordType::from),
    ]
}

fn arb_status() -> impl Strategy<Value = RecordStatus> {
    prop_oneof![
        3 => Just(RecordStatus::Pending),
        3 => Just(RecordStatus::Overdue),
        3 => Just(RecordStatus::Paid),
        1 => "[A-Za-z]{1,8}".prop_map(RecordStatus::from),
    ]
}

/// Non-negative amounts with up to two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_record() -> impl Strategy<Value = FinancialRecord> {
    (any::<u32>(), arb_type(), arb_amount(), arb_status(), 0u32..365).prop_map(
        |(n, record_type, amount, status, day)| FinancialRecord {
            id: format!("FIN{n}"),
            record_type,
            party: format!("Party {n}"),
            amount,
            due_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Days::new(day as u64),
            status,
            invoice_number: format!("INV-{n}"),
        },
    )
}

fn arb_ledger() -> impl Strategy<Value = Vec<FinancialRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}

fn is_known_type(record: &FinancialRecord) -> bool {
    matches!(record.record_type, RecordType::Receivable | RecordType::Payable)
}

fn is_known_status(record: &FinancialRecord) -> bool {
    matches!(
        record.status,
        RecordStatus::Pending | RecordStatus::Overdue | RecordStatus::Paid
    )
}

proptest! {
    #[test]
    fn prop_partitions_cover_all_records(records in arb_ledger()) {
        let summary = summarize(&records);
        let unclassified = records.iter().filter(|r| !is_known_type(r)).count();
        prop_assert_eq!(
            summary.receivables.len() + summary.payables.len() + unclassified,
            records.len()
        );
        prop_assert_eq!(&summary.records, &records);
    }

    #[test]
    fn prop_partitions_preserve_relative_order(records in arb_ledger()) {
        let summary = summarize(&records);
        let expected: Vec<&FinancialRecord> =
            records.iter().filter(|r| r.is_receivable()).collect();
        let actual: Vec<&FinancialRecord> = summary.receivables.iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_receivable_total_is_sum_of_buckets(
        records in arb_ledger().prop_map(|rs| rs.into_iter().filter(is_known_status).collect::<Vec<_>>())
    ) {
        let summary = summarize(&records);
        let breakdown = ReceivableBreakdown::compute(&summary.receivables);
        prop_assert_eq!(
            summary.totals.total_receivable,
            breakdown.paid + breakdown.pending + breakdown.overdue
        );
        prop_assert_eq!(summary.totals.receivable_paid, breakdown.paid);
        prop_assert_eq!(summary.totals.receivable_overdue, breakdown.overdue);
    }

    #[test]
    fn prop_payable_total_is_sum_of_buckets(
        records in arb_ledger().prop_map(|rs| {
            rs.into_iter()
                .filter(|r| matches!(r.status, RecordStatus::Pending | RecordStatus::Paid))
                .collect::<Vec<_>>()
        })
    ) {
        let summary = summarize(&records);
        let breakdown = PayableBreakdown::compute(&summary.payables);
        prop_assert_eq!(summary.totals.total_payable, breakdown.paid + breakdown.pending);
    }

    #[test]
    fn prop_chart_series_sum_to_totals(
        records in arb_ledger().prop_map(|rs| {
            rs.into_iter()
                .filter(is_known_status)
                .filter(|r| !(r.is_payable() && r.status == RecordStatus::Overdue))
                .collect::<Vec<_>>()
        })
    ) {
        let summary = summarize(&records);
        let receivable_sum: Decimal = summary.receivable_chart_data.iter().map(|e| e.value).sum();
        let payable_sum: Decimal = summary.payable_chart_data.iter().map(|e| e.value).sum();
        prop_assert_eq!(receivable_sum, summary.totals.total_receivable);
        prop_assert_eq!(payable_sum, summary.totals.total_payable);
    }

    #[test]
    fn prop_buckets_never_exceed_totals(records in arb_ledger()) {
        let summary = summarize(&records);
        let receivable_sum: Decimal = summary.receivable_chart_data.iter().map(|e| e.value).sum();
        let payable_sum: Decimal = summary.payable_chart_data.iter().map(|e| e.value).sum();
        prop_assert!(receivable_sum <= summary.totals.total_receivable);
        prop_assert!(payable_sum <= summary.totals.total_payable);
    }

    #[test]
    fn prop_summarize_is_deterministic(records in arb_ledger()) {
        prop_assert_eq!(summarize(&records), summarize(&records));
    }

    #[test]
    fn prop_chart_skeleton_is_fixed(records in arb_ledger()) {
        let summary = summarize(&records);
        let receivable: Vec<(&str, &str)> = summary
            .receivable_chart_data
            .iter()
            .map(|e| (e.name, e.color))
            .collect();
        let payable: Vec<(&str, &str)> = summary
            .payable_chart_data
            .iter()
            .map(|e| (e.name, e.color))
            .collect();
        prop_assert_eq!(
            receivable,
            vec![("Collected", "#16A34A"), ("Pending", "#F59E0B"), ("Overdue", "#EF4444")]
        );
        prop_assert_eq!(payable, vec![("Paid", "#16A34A"), ("Pending", "#F59E0B")]);
    }
}

#[test]
fn seed_scenario_breakdowns() {
    let records = finboard::domain::seed::seed_records();
    let summary = summarize(&records);
    let receivable = ReceivableBreakdown::compute(&summary.receivables);
    let payable = PayableBreakdown::compute(&summary.payables);

    assert_eq!(receivable.pending, Decimal::from(8815));
    assert_eq!(receivable.paid, Decimal::from(5500));
    assert_eq!(receivable.overdue, Decimal::from(8000));
    assert_eq!(payable.paid, Decimal::from(20000));
    assert_eq!(payable.pending, Decimal::from(24400));
}

#[test]
fn other_type_contributes_to_nothing() {
    let records = vec![
        make_record("R1", "Receivable", 10, "Pending"),
        make_record("X1", "Other", 1_000, "Pending"),
        make_record("P1", "Payable", 20, "Paid"),
    ];
    let summary = summarize(&records);
    assert_eq!(summary.records.len(), 3);
    assert!(summary.receivables.iter().all(|r| r.id != "X1"));
    assert!(summary.payables.iter().all(|r| r.id != "X1"));
    assert_eq!(summary.totals.total_receivable, Decimal::from(10));
    assert_eq!(summary.totals.total_payable, Decimal::from(20));
}
