use serde::{Deserialize, Serialize};

use crate::numeric::RawAmount;

use super::Id;

/// How the account-management service classifies an account.
///
/// Upstream tags are free-form text in practice; parsing is case-insensitive
/// and anything unrecognized lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AccountCategory {
    Checking,
    Savings,
    CreditCard,
    Investment,
    Cash,
    Loan,
    Other,
}

impl From<String> for AccountCategory {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "checking" => Self::Checking,
            "savings" => Self::Savings,
            "credit_card" | "credit-card" | "creditcard" => Self::CreditCard,
            "investment" => Self::Investment,
            "cash" => Self::Cash,
            "loan" => Self::Loan,
            _ => Self::Other,
        }
    }
}

/// An individual financial account (checking, savings, credit card, etc.)
/// as the account-management service stores it.
///
/// Read-only snapshot: this crate never mutates accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Id,
    pub name: String,
    pub category: AccountCategory,
    /// Balance as the store recorded it; a number or a numeric string.
    #[serde(default)]
    pub balance: RawAmount,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        category: AccountCategory,
        balance: impl Into<RawAmount>,
    ) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            category,
            balance: balance.into(),
            active: true,
        }
    }

    /// Present-moment balance, coerced to a finite number.
    pub fn balance_value(&self) -> f64 {
        self.balance.to_finite()
    }
}
