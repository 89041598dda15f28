//! Per-section synthetic substitutes for empty dashboards.
//!
//! A brand-new set of books has no transactions; rather than chart nothing,
//! the cash-flow section gets a fabricated but plausible series. Sections
//! where fabrication would mislead — top expenses, bills, credit cards —
//! stay empty instead. Synthetic numbers never mix with real ones: a
//! section is either fully real or fully replaced.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use crate::config::FallbackProfile;
use crate::models::{Account, CashFlowPoint, DashboardSummary};

use super::cash_flow::day_label;
use super::ReportPeriod;

/// Source of presentation-only randomness, injectable so tests can pin the
/// synthetic output exactly.
pub trait RandomSource: Send + Sync {
    /// Uniform sample in `[0, 1)`.
    fn unit(&self) -> f64;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted.
#[derive(Debug)]
pub struct SequenceRandom {
    samples: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn unit(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.5;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.samples[index % self.samples.len()]
    }
}

/// True when the real summary carries no signal beyond the account count.
pub fn summary_is_blank(summary: &DashboardSummary) -> bool {
    summary.total_balance == 0.0
        && summary.monthly_income == 0.0
        && summary.monthly_expenses == 0.0
}

/// Rebuild the summary shape from the real accounts with zeroed flows.
///
/// Fallback never invents income; this path only guarantees the section is
/// populated.
pub fn synthesize_summary(accounts: &[Account]) -> DashboardSummary {
    DashboardSummary {
        total_balance: accounts.iter().map(Account::balance_value).sum(),
        monthly_income: 0.0,
        monthly_expenses: 0.0,
        monthly_result: 0.0,
        accounts_count: accounts.len(),
    }
}

/// Fabricate a full-length series for the period, one point per bucket day.
///
/// Follows the same accumulation rule as the real series, seeded with the
/// profile's opening balance so the trend starts somewhere plausible. Each
/// day's inflow and outflow are perturbed independently.
pub fn synthesize_series(
    profile: &FallbackProfile,
    random: &dyn RandomSource,
    period: ReportPeriod,
    now: DateTime<Utc>,
) -> Vec<CashFlowPoint> {
    let mut accumulator = profile.opening_balance;
    period
        .day_buckets(now)
        .into_iter()
        .map(|day| {
            let positive = profile.base_income * perturb(random, profile.jitter);
            let negative = profile.base_expense * perturb(random, profile.jitter);
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

/// Multiplicative factor in `[1 - jitter, 1 + jitter)`.
fn perturb(random: &dyn RandomSource, jitter: f64) -> f64 {
    1.0 - jitter + random.unit() * jitter * 2.0
}
