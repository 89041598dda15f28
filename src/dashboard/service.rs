use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::DashboardConfig;
use crate::models::DashboardData;
use crate::sources::{AccountSource, TransactionSource};

use super::fallback::{self, RandomSource, ThreadRandom};
use super::{bills, cash_flow, credit_cards, summary, top_expenses, ReportPeriod};

/// Aggregates account and transaction snapshots into dashboard data.
///
/// Calls are all-or-nothing: a failed fetch propagates to the caller and no
/// partial dashboard is produced. Inputs are read-only snapshots and every
/// output is freshly allocated, so concurrent calls for different requests
/// cannot cross-talk.
pub struct DashboardService {
    accounts: Arc<dyn AccountSource>,
    transactions: Arc<dyn TransactionSource>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(accounts: Arc<dyn AccountSource>, transactions: Arc<dyn TransactionSource>) -> Self {
        Self {
            accounts,
            transactions,
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRandom),
            config: DashboardConfig::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Compose the dashboard for the requested period.
    pub async fn dashboard(&self, period: ReportPeriod) -> Result<DashboardData> {
        let now = self.clock.now();
        let window = period.window(now);
        debug!(
            period = period.as_str(),
            start = %window.start,
            end = %window.end,
            "Aggregating dashboard"
        );

        // The two fetches are independent; issue them together and require
        // both before computing anything.
        let (accounts, transactions) = tokio::try_join!(
            self.accounts.list_accounts(),
            self.transactions.list_transactions(&window),
        )?;
        debug!(
            accounts = accounts.len(),
            transactions = transactions.len(),
            "Fetched dashboard inputs"
        );

        let mut summary = summary::summarize(&accounts, &transactions);
        let mut series = cash_flow::build_series(&transactions, period, now);
        let top_expenses =
            top_expenses::rank_top_expenses(&transactions, self.config.top_expense_limit);
        let bills = bills::bills_due(&transactions, now, self.config.bills_horizon_days);
        let credit_cards = credit_cards::credit_cards(&accounts);

        if fallback::summary_is_blank(&summary) {
            warn!(section = "summary", "No real signal; repopulating from accounts");
            summary = fallback::synthesize_summary(&accounts);
        }
        if transactions.is_empty() || series.is_empty() {
            warn!(section = "cash_flow", "No real series; synthesizing placeholder");
            series = fallback::synthesize_series(
                &self.config.fallback,
                self.random.as_ref(),
                period,
                now,
            );
        }

        Ok(DashboardData {
            summary,
            cash_flow: series,
            top_expenses,
            bills,
            credit_cards,
            accounts,
        })
    }
}
