//! Composed dashboard shapes returned to the presentation layer.
//!
//! Field names serialize camelCase because the consumer is the web
//! dashboard; everything here is freshly allocated per aggregation call and
//! never persisted.

use serde::{Deserialize, Serialize};

use super::Account;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Always exactly `monthly_income - monthly_expenses`.
    pub monthly_result: f64,
    pub accounts_count: usize,
}

/// One day of the cash-flow chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    /// Day label as the chart renders it (`DD/MM`).
    pub date: String,
    /// Inflows that day.
    pub positive: f64,
    /// Outflows that day, stored as a magnitude.
    pub negative: f64,
    /// Running balance up to and including this day, clamped at zero.
    pub flow: f64,
}

/// One ranked expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopExpense {
    /// 1-based rank.
    pub position: usize,
    pub name: String,
    pub amount: f64,
    /// Share of the expense total across all categories, e.g. `"43%"`.
    pub percentage: String,
}

/// One side of the bills summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillsSide {
    pub count: usize,
    pub amount: f64,
}

/// What falls due or is expected within the bills horizon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillsSummary {
    pub bills_to_pay: BillsSide,
    pub bills_to_receive: BillsSide,
}

/// Utilization view for one credit-card account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardSummary {
    pub name: String,
    pub limit: f64,
    pub used: f64,
    pub available: f64,
}

/// Everything one dashboard request needs, composed by a single
/// aggregation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub cash_flow: Vec<CashFlowPoint>,
    pub top_expenses: Vec<TopExpense>,
    pub bills: BillsSummary,
    pub credit_cards: Vec<CreditCardSummary>,
    /// Raw account snapshot the summary was computed from.
    pub accounts: Vec<Account>,
}
