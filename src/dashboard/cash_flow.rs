//! Per-day cash-flow series with an accumulated running balance.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::{CashFlowPoint, Transaction, TransactionKind};

use super::ReportPeriod;

/// Chart label for a bucket day.
pub(crate) fn day_label(day: NaiveDate) -> String {
    format!("{:02}/{:02}", day.day(), day.month())
}

/// Build the cash-flow series for the period ending at `now`.
///
/// Every bucket day gets a point even when nothing happened that day.
/// Records whose stored date does not parse are left out of the whole
/// series. The running balance is clamped at zero for display: this chart
/// shows a trend, the authoritative balance lives in the summary.
pub fn build_series(
    transactions: &[Transaction],
    period: ReportPeriod,
    now: DateTime<Utc>,
) -> Vec<CashFlowPoint> {
    let dated: Vec<(NaiveDate, &Transaction)> = transactions
        .iter()
        .filter_map(|tx| tx.occurred_on().map(|day| (day, tx)))
        .collect();

    let mut accumulator = 0.0;
    period
        .day_buckets(now)
        .into_iter()
        .map(|day| {
            let mut positive = 0.0;
            let mut negative = 0.0;
            for (tx_day, tx) in &dated {
                if *tx_day != day {
                    continue;
                }
                match tx.kind {
                    TransactionKind::Income => positive += tx.magnitude(),
                    TransactionKind::Expense => negative += tx.magnitude(),
                    TransactionKind::Transfer | TransactionKind::Other => {}
                }
            }
            accumulator += positive - negative;
            CashFlowPoint {
                date: day_label(day),
                positive,
                negative,
                flow: accumulator.max(0.0),
            }
        })
        .collect()
}
