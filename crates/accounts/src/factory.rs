use minibank_core::Money;

use crate::account::{Account, AccountVariant};

/// Picks the account variant at creation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountFactory;

impl AccountFactory {
    /// Build a `premium` account when `is_premium` is set, `standard` otherwise.
    pub fn create(owner: impl Into<String>, balance: Money, is_premium: bool) -> Account {
        Account::new(owner, balance, AccountVariant::from_premium(is_premium))
    }
}
