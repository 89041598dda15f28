use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::numeric::RawAmount;

use super::{CategoryRef, Id};

/// Label expense grouping uses when a transaction has no category.
pub const UNCATEGORIZED_LABEL: &str = "Outros";

/// Direction of a transaction.
///
/// Stored loosely upstream ("income", "INCOME", ...); normalized here once
/// so calculators match on the enum instead of re-folding case everywhere.
/// Unrecognized kinds land in `Other` and count toward nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
    Other,
}

impl From<String> for TransactionKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            "transfer" => Self::Transfer,
            _ => Self::Other,
        }
    }
}

/// A financial transaction as the transaction service stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Magnitude; direction comes from `kind`, not from the stored sign.
    #[serde(default)]
    pub amount: RawAmount,
    /// Date exactly as stored; may be absent or unparsable.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: impl Into<RawAmount>) -> Self {
        Self {
            id: Id::new(),
            kind,
            amount: amount.into(),
            date: None,
            category: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    /// The moment the transaction occurred, if its stored date parses.
    ///
    /// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as
    /// midnight UTC). Anything else returns `None`, which excludes the
    /// record from every date-keyed view while leaving it in date-free
    /// aggregates.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        raw.parse::<NaiveDate>()
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|at| at.and_utc())
    }

    /// Calendar day of `occurred_at`.
    pub fn occurred_on(&self) -> Option<NaiveDate> {
        self.occurred_at().map(|at| at.date_naive())
    }

    /// Category display name, or the shared uncategorized label.
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    /// Amount magnitude, coerced to a finite number.
    pub fn magnitude(&self) -> f64 {
        self.amount.magnitude()
    }
}
