use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default number of ranked expense categories.
fn default_top_expense_limit() -> usize {
    5
}

/// Default bills-due lookahead (days).
fn default_bills_horizon_days() -> i64 {
    7
}

/// Engine tunables for dashboard aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// How many expense categories the ranking keeps.
    #[serde(default = "default_top_expense_limit")]
    pub top_expense_limit: usize,

    /// Lookahead window for the bills summary, in days.
    #[serde(default = "default_bills_horizon_days")]
    pub bills_horizon_days: i64,

    /// Parameters for the synthetic cash-flow series.
    pub fallback: FallbackProfile,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_expense_limit: default_top_expense_limit(),
            bills_horizon_days: default_bills_horizon_days(),
            fallback: FallbackProfile::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Parsing {}", path.display()))
    }
}

/// Parameters for the placeholder series shown on empty books.
///
/// These are presentation defaults, not modeled financials; they only exist
/// so a brand-new dashboard has a plausible-looking chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackProfile {
    /// Daily inflow the placeholder series is built around.
    pub base_income: f64,

    /// Daily outflow the placeholder series is built around.
    pub base_expense: f64,

    /// Starting balance for the placeholder running total.
    pub opening_balance: f64,

    /// Per-day multiplicative perturbation, as a fraction (0.25 = ±25%).
    pub jitter: f64,
}

impl Default for FallbackProfile {
    fn default() -> Self {
        Self {
            base_income: 2000.0,
            base_expense: 1500.0,
            opening_balance: 5000.0,
            jitter: 0.25,
        }
    }
}
