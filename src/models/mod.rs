mod account;
mod category;
mod dashboard;
mod id;
mod transaction;

pub use account::{Account, AccountCategory};
pub use category::CategoryRef;
pub use dashboard::{
    BillsSide, BillsSummary, CashFlowPoint, CreditCardSummary, DashboardData, DashboardSummary,
    TopExpense,
};
pub use id::Id;
pub use transaction::{Transaction, TransactionKind, UNCATEGORIZED_LABEL};
