//! Near-term payables and receivables.

use chrono::{DateTime, Duration, Utc};

use crate::models::{BillsSummary, Transaction, TransactionKind};

/// Summarize what falls due inside `[now, now + horizon_days)`.
///
/// Expenses land on the payable side, income on the receivable side, each
/// as a count plus summed magnitude. The interval is half-open: a record
/// dated exactly `now` is due, one dated exactly at the horizon is not.
/// Records without a parseable date are never counted as due.
pub fn bills_due(transactions: &[Transaction], now: DateTime<Utc>, horizon_days: i64) -> BillsSummary {
    let horizon = now + Duration::days(horizon_days);

    let mut summary = BillsSummary::default();
    for tx in transactions {
        let Some(at) = tx.occurred_at() else {
            continue;
        };
        if at < now || at >= horizon {
            continue;
        }
        let side = match tx.kind {
            TransactionKind::Expense => &mut summary.bills_to_pay,
            TransactionKind::Income => &mut summary.bills_to_receive,
            TransactionKind::Transfer | TransactionKind::Other => continue,
        };
        side.count += 1;
        side.amount += tx.magnitude();
    }
    summary
}
