//! Read contracts to the account and transaction services.
//!
//! The CRUD layer owns these records; this crate only reads snapshots
//! through the two traits below. In-memory implementations back the test
//! suites.

use anyhow::Result;
use tokio::sync::Mutex;

use crate::dashboard::ReportWindow;
use crate::models::{Account, Transaction};

/// Account service read contract.
///
/// Returns every account regardless of window; the engine does not paginate
/// or filter beyond what the calculators need.
#[async_trait::async_trait]
pub trait AccountSource: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<Account>>;
}

/// Transaction service read contract.
///
/// Implementations return transactions whose date falls within the window;
/// the engine re-validates every date defensively and never trusts the
/// source to have filtered perfectly.
#[async_trait::async_trait]
pub trait TransactionSource: Send + Sync {
    async fn list_transactions(&self, window: &ReportWindow) -> Result<Vec<Transaction>>;
}

/// In-memory account source for tests.
pub struct MemoryAccountSource {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryAccountSource {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }
}

#[async_trait::async_trait]
impl AccountSource for MemoryAccountSource {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.clone())
    }
}

/// In-memory transaction source for tests.
///
/// Applies the same `[start, end]` window filter the real collaborator
/// promises. Records without a parseable date pass through: they cannot be
/// window-filtered, and the calculators decide their fate.
pub struct MemoryTransactionSource {
    transactions: Mutex<Vec<Transaction>>,
}

impl MemoryTransactionSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Mutex::new(transactions),
        }
    }
}

#[async_trait::async_trait]
impl TransactionSource for MemoryTransactionSource {
    async fn list_transactions(&self, window: &ReportWindow) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.lock().await;
        Ok(transactions
            .iter()
            .filter(|tx| match tx.occurred_at() {
                Some(at) => at >= window.start && at <= window.end,
                None => true,
            })
            .cloned()
            .collect())
    }
}
