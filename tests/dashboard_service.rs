use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};

use stewardbook::clock::FixedClock;
use stewardbook::dashboard::{DashboardService, ReportPeriod, ReportWindow, SequenceRandom};
use stewardbook::models::{Account, AccountCategory, CategoryRef, Transaction, TransactionKind};
use stewardbook::sources::{
    AccountSource, MemoryAccountSource, MemoryTransactionSource, TransactionSource,
};

fn fixed_now() -> DateTime<Utc> {
    // Mid-January: a 31-day month.
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

fn service_with(accounts: Vec<Account>, transactions: Vec<Transaction>) -> DashboardService {
    DashboardService::new(
        Arc::new(MemoryAccountSource::new(accounts)),
        Arc::new(MemoryTransactionSource::new(transactions)),
    )
    .with_clock(Arc::new(FixedClock::new(fixed_now())))
    .with_random(Arc::new(SequenceRandom::new(vec![0.5])))
}

#[tokio::test]
async fn empty_books_still_render_a_full_dashboard() -> Result<()> {
    let service = service_with(Vec::new(), Vec::new());
    let data = service.dashboard(ReportPeriod::Month).await?;

    assert_eq!(data.summary.accounts_count, 0);
    assert_eq!(data.summary.total_balance, 0.0);
    assert_eq!(data.summary.monthly_result, 0.0);

    // Synthetic series: one point per January day, plausible non-zero flows.
    assert_eq!(data.cash_flow.len(), 31);
    assert!(data.cash_flow.iter().all(|point| point.flow >= 0.0));
    assert!(data.cash_flow.iter().all(|point| point.positive > 0.0));

    // No fabrication for the remaining sections.
    assert!(data.top_expenses.is_empty());
    assert_eq!(data.bills.bills_to_pay.count, 0);
    assert_eq!(data.bills.bills_to_receive.amount, 0.0);
    assert!(data.credit_cards.is_empty());
    assert!(data.accounts.is_empty());
    Ok(())
}

#[tokio::test]
async fn synthetic_series_is_exact_under_a_pinned_random_source() -> Result<()> {
    let service = service_with(Vec::new(), Vec::new());
    let data = service.dashboard(ReportPeriod::Week).await?;

    // unit = 0.5 pins every perturbation factor at 1.0: income 2000,
    // expense 1500, opening balance 5000, so +500 net per day.
    assert_eq!(data.cash_flow.len(), 7);
    assert_eq!(data.cash_flow[0].positive, 2000.0);
    assert_eq!(data.cash_flow[0].negative, 1500.0);
    assert_eq!(data.cash_flow[0].flow, 5500.0);
    assert_eq!(data.cash_flow[6].flow, 8500.0);
    Ok(())
}

#[tokio::test]
async fn single_credit_card_account_maps_to_one_utilization_entry() -> Result<()> {
    let service = service_with(
        vec![Account::new("Cartão", AccountCategory::CreditCard, 1000.0)],
        Vec::new(),
    );
    let data = service.dashboard(ReportPeriod::Month).await?;

    assert_eq!(data.credit_cards.len(), 1);
    let card = &data.credit_cards[0];
    assert_eq!(card.used, 1000.0);
    assert_eq!(card.available, 1000.0);
    assert_eq!(card.limit, 2000.0);

    // A balance-carrying account also keeps the summary real.
    assert_eq!(data.summary.total_balance, 1000.0);
    assert_eq!(data.summary.accounts_count, 1);
    Ok(())
}

#[tokio::test]
async fn undated_expense_ranks_but_is_neither_due_nor_charted() -> Result<()> {
    let undated = Transaction::new(TransactionKind::Expense, 120.0)
        .with_date("not-a-date")
        .with_category(CategoryRef::named("Manutenção"));
    let dated = Transaction::new(TransactionKind::Income, 80.0).with_date("2026-01-10");

    let service = service_with(Vec::new(), vec![undated, dated]);
    let data = service.dashboard(ReportPeriod::Month).await?;

    // Included: category ranking has no date filter.
    assert_eq!(data.top_expenses.len(), 1);
    assert_eq!(data.top_expenses[0].name, "Manutenção");
    assert_eq!(data.top_expenses[0].amount, 120.0);

    // Excluded: bills and the charted series both key on a valid date.
    assert_eq!(data.bills.bills_to_pay.count, 0);
    let charted_out: f64 = data.cash_flow.iter().map(|point| point.negative).sum();
    assert_eq!(charted_out, 0.0);
    let charted_in: f64 = data.cash_flow.iter().map(|point| point.positive).sum();
    assert_eq!(charted_in, 80.0);

    // And the summary still counts the broken record.
    assert_eq!(data.summary.monthly_expenses, 120.0);
    Ok(())
}

#[tokio::test]
async fn bills_window_includes_now_and_excludes_the_horizon() -> Result<()> {
    let at_now = Transaction::new(TransactionKind::Expense, 10.0)
        .with_date("2026-01-15T12:00:00Z");
    let at_horizon = Transaction::new(TransactionKind::Expense, 20.0)
        .with_date("2026-01-22T12:00:00Z");

    let service = service_with(Vec::new(), vec![at_now, at_horizon]);
    let data = service.dashboard(ReportPeriod::Month).await?;

    assert_eq!(data.bills.bills_to_pay.count, 1);
    assert_eq!(data.bills.bills_to_pay.amount, 10.0);
    Ok(())
}

#[tokio::test]
async fn real_transactions_are_never_replaced_by_synthetic_data() -> Result<()> {
    let service = service_with(
        vec![Account::new("Corrente", AccountCategory::Checking, 500.0)],
        vec![
            Transaction::new(TransactionKind::Income, 300.0).with_date("2026-01-05"),
            Transaction::new(TransactionKind::Expense, 100.0).with_date("2026-01-06"),
        ],
    );
    let data = service.dashboard(ReportPeriod::Month).await?;

    let total_in: f64 = data.cash_flow.iter().map(|point| point.positive).sum();
    let total_out: f64 = data.cash_flow.iter().map(|point| point.negative).sum();
    assert_eq!(total_in, 300.0);
    assert_eq!(total_out, 100.0);

    assert_eq!(data.summary.monthly_income, 300.0);
    assert_eq!(data.summary.monthly_expenses, 100.0);
    assert_eq!(data.summary.monthly_result, 200.0);
    Ok(())
}

struct FailingAccounts;

#[async_trait::async_trait]
impl AccountSource for FailingAccounts {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        anyhow::bail!("account service unavailable")
    }
}

struct FailingTransactions;

#[async_trait::async_trait]
impl TransactionSource for FailingTransactions {
    async fn list_transactions(&self, _window: &ReportWindow) -> Result<Vec<Transaction>> {
        anyhow::bail!("transaction service unavailable")
    }
}

#[tokio::test]
async fn fetch_failures_propagate_unrecovered() {
    let service = DashboardService::new(
        Arc::new(FailingAccounts),
        Arc::new(MemoryTransactionSource::new(Vec::new())),
    )
    .with_clock(Arc::new(FixedClock::new(fixed_now())));

    let err = service.dashboard(ReportPeriod::Month).await.unwrap_err();
    assert!(err.to_string().contains("account service unavailable"));

    let service = DashboardService::new(
        Arc::new(MemoryAccountSource::new(Vec::new())),
        Arc::new(FailingTransactions),
    )
    .with_clock(Arc::new(FixedClock::new(fixed_now())));

    let err = service.dashboard(ReportPeriod::Week).await.unwrap_err();
    assert!(err.to_string().contains("transaction service unavailable"));
}

#[tokio::test]
async fn concurrent_requests_do_not_cross_talk() -> Result<()> {
    let rich = service_with(
        vec![Account::new("Corrente", AccountCategory::Checking, 900.0)],
        vec![Transaction::new(TransactionKind::Income, 300.0).with_date("2026-01-05")],
    );
    let poor = service_with(Vec::new(), Vec::new());

    let (rich_data, poor_data) = tokio::try_join!(
        rich.dashboard(ReportPeriod::Month),
        poor.dashboard(ReportPeriod::Month),
    )?;

    assert_eq!(rich_data.summary.total_balance, 900.0);
    assert_eq!(rich_data.summary.monthly_income, 300.0);
    assert_eq!(poor_data.summary.total_balance, 0.0);
    assert_eq!(poor_data.summary.accounts_count, 0);
    Ok(())
}
