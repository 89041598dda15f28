//! Credit-card utilization view.

use crate::models::{Account, AccountCategory, CreditCardSummary};

/// Project credit-card accounts into the utilization cards.
///
/// The store keeps no credit-limit field, so `limit` is a placeholder
/// derived as twice the current balance. Display filler, not a modeled
/// limit — do not build on it.
pub fn credit_cards(accounts: &[Account]) -> Vec<CreditCardSummary> {
    accounts
        .iter()
        .filter(|account| account.category == AccountCategory::CreditCard)
        .map(|account| {
            let used = account.balance_value();
            CreditCardSummary {
                name: account.name.clone(),
                limit: used * 2.0,
                used,
                available: used,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_only_credit_card_accounts() {
        let accounts = vec![
            Account::new("Corrente", AccountCategory::Checking, 5000.0),
            Account::new("Cartão Visa", AccountCategory::CreditCard, 1000.0),
            Account::new("Cartão Master", AccountCategory::CreditCard, "350.25"),
        ];
        let cards = credit_cards(&accounts);
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].name, "Cartão Visa");
        assert_eq!(cards[0].used, 1000.0);
        assert_eq!(cards[0].available, 1000.0);
        assert_eq!(cards[0].limit, 2000.0);

        assert_eq!(cards[1].used, 350.25);
        assert_eq!(cards[1].limit, 700.50);
    }

    #[test]
    fn no_cards_means_empty_view() {
        let accounts = vec![Account::new("Caixa", AccountCategory::Cash, 100.0)];
        assert!(credit_cards(&accounts).is_empty());
        assert!(credit_cards(&[]).is_empty());
    }
}
