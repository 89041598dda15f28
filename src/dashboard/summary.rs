//! Headline summary reduction.

use crate::models::{Account, DashboardSummary, Transaction, TransactionKind};

/// Reduce the account snapshot and the windowed transactions to the
/// dashboard's headline numbers.
///
/// The balance total is a present-moment snapshot over every account. The
/// income/expense pair trusts the caller to have windowed the transaction
/// list; there is no date filter here, so a record with a broken date still
/// counts (date validity only matters to day-bucketed views).
pub fn summarize(accounts: &[Account], transactions: &[Transaction]) -> DashboardSummary {
    let total_balance: f64 = accounts.iter().map(Account::balance_value).sum();

    let mut monthly_income = 0.0;
    let mut monthly_expenses = 0.0;
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => monthly_income += tx.magnitude(),
            TransactionKind::Expense => monthly_expenses += tx.magnitude(),
            TransactionKind::Transfer | TransactionKind::Other => {}
        }
    }

    DashboardSummary {
        total_balance,
        monthly_income,
        monthly_expenses,
        monthly_result: monthly_income - monthly_expenses,
        accounts_count: accounts.len(),
    }
}
