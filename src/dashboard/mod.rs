mod bills;
mod cash_flow;
mod credit_cards;
mod fallback;
mod period;
mod service;
mod summary;
mod top_expenses;

pub use bills::bills_due;
pub use cash_flow::build_series;
pub use credit_cards::credit_cards;
pub use fallback::{
    summary_is_blank, synthesize_series, synthesize_summary, RandomSource, SequenceRandom,
    ThreadRandom,
};
pub use period::{ParsePeriodError, ReportPeriod, ReportWindow};
pub use service::DashboardService;
pub use summary::summarize;
pub use top_expenses::rank_top_expenses;
