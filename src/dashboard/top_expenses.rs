//! Expense ranking by category share.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{TopExpense, Transaction, TransactionKind};

/// Rank expense categories by their share of total spend.
///
/// Groups every expense-typed transaction by category display name —
/// deliberately with no date filter, so one broken date cannot empty the
/// spending view. Percentages are computed against the grand total across
/// all categories, not just the kept ones. Returns nothing when there is no
/// expense at all, which also keeps the denominator away from zero.
pub fn rank_top_expenses(transactions: &[Transaction], limit: usize) -> Vec<TopExpense> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }
        *groups.entry(tx.category_label()).or_insert(0.0) += tx.magnitude();
    }

    let total: f64 = groups.values().sum();
    if total == 0.0 {
        return Vec::new();
    }

    // BTreeMap grouping plus a stable sort keeps tie order deterministic
    // (equal sums rank by category name).
    let mut ranked: Vec<(&str, f64)> = groups.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, (name, amount))| TopExpense {
            position: index + 1,
            name: name.to_string(),
            amount,
            percentage: format!("{}%", (amount / total * 100.0).round() as i64),
        })
        .collect()
}
