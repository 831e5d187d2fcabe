//! Owner-keyed account registry.
//!
//! The registry exclusively owns every [`Account`]. Mutations only happen
//! through its operations; readers get shared references or snapshots.
//!
//! Failure handling mirrors the console contract:
//! - unknown owners are a silent no-op (nothing printed, `AccountNotFound`)
//! - an uncovered withdrawal prints `Insufficient balance`
//! - an uncovered transfer is a silent no-op (`InsufficientFunds`)

use std::collections::BTreeMap;

use serde::Serialize;

use minibank_accounts::{Account, AccountFactory, AccountVariant, WithdrawOutcome};
use minibank_core::{BankError, BankResult, Money};

use crate::console::{Console, Stdout};

/// Key suffix used by [`Bank::duplicate_account`].
pub const COPY_SUFFIX: &str = "_copy";

/// Point-in-time view of one registry entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSnapshot {
    /// Registry key (differs from `owner` for duplicated entries).
    pub key: String,
    pub owner: String,
    pub balance: Money,
    pub variant: AccountVariant,
}

/// The bank: registry of accounts plus the console it reports to.
///
/// Entries are kept in a `BTreeMap`, so iteration and the printed dump are in
/// ascending key order.
#[derive(Debug)]
pub struct Bank<C = Stdout> {
    accounts: BTreeMap<String, Account>,
    console: C,
}

impl Bank<Stdout> {
    /// Bank reporting to process stdout.
    pub fn stdout() -> Self {
        Self::new(Stdout)
    }
}

impl<C: Console> Bank<C> {
    pub fn new(mut console: C) -> Self {
        console.print_line("Bank System Started");
        tracing::info!("bank system started");

        Self {
            accounts: BTreeMap::new(),
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Open an account under `owner`.
    ///
    /// An existing entry for the same owner is replaced and returned.
    pub fn open_account(
        &mut self,
        owner: impl Into<String>,
        balance: Money,
        is_premium: bool,
    ) -> Option<Account> {
        let owner = owner.into();
        let account = AccountFactory::create(owner.clone(), balance, is_premium);
        let variant = account.variant();

        let replaced = self.accounts.insert(owner.clone(), account);
        if let Some(previous) = &replaced {
            tracing::warn!(
                owner = %owner,
                previous_balance = %previous.balance(),
                "account overwritten by open"
            );
        }

        self.console
            .print_line(&format!("[LOG] Account opened for {owner}"));
        tracing::info!(owner = %owner, balance = %balance, %variant, "account opened");

        replaced
    }

    /// Deposit into `owner`'s account and notify.
    ///
    /// Returns the new balance.
    pub fn deposit(
        &mut self,
        owner: &str,
        amount: Money,
        notifier: &mut dyn FnMut(&str),
    ) -> BankResult<Money> {
        let Some(account) = self.accounts.get_mut(owner) else {
            tracing::debug!(owner, "deposit skipped: account not found");
            return Err(BankError::not_found(owner));
        };

        let balance = account.deposit(amount);
        tracing::debug!(owner, amount = %amount, balance = %balance, "deposit applied");

        notifier(&format!("{owner} deposited {amount}"));
        Ok(balance)
    }

    /// Withdraw from `owner`'s account and notify.
    ///
    /// The notification goes out whether or not the withdrawal was covered.
    pub fn withdraw(
        &mut self,
        owner: &str,
        amount: Money,
        notifier: &mut dyn FnMut(&str),
    ) -> BankResult<Money> {
        let Some(account) = self.accounts.get_mut(owner) else {
            tracing::debug!(owner, "withdraw skipped: account not found");
            return Err(BankError::not_found(owner));
        };

        let result = match account.withdraw(amount) {
            WithdrawOutcome::Completed { balance } => {
                tracing::debug!(owner, amount = %amount, balance = %balance, "withdrawal applied");
                Ok(balance)
            }
            WithdrawOutcome::Insufficient { balance, requested } => {
                let err = BankError::insufficient(owner, balance, requested);
                self.console.print_line(&err.to_string());
                tracing::warn!(owner, balance = %balance, requested = %requested, "withdrawal refused");
                Err(err)
            }
        };

        notifier(&format!("{owner} withdrew {amount}"));
        result
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// Both accounts must exist and `from` must cover the amount; otherwise
    /// nothing changes and nothing is printed.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> BankResult<()> {
        let Some(source) = self.accounts.get(from) else {
            tracing::debug!(from, to, "transfer skipped: source not found");
            return Err(BankError::not_found(from));
        };
        if !self.accounts.contains_key(to) {
            tracing::debug!(from, to, "transfer skipped: destination not found");
            return Err(BankError::not_found(to));
        }
        if !source.can_cover(amount) {
            tracing::debug!(from, to, amount = %amount, "transfer skipped: insufficient funds");
            return Err(BankError::insufficient(from, source.balance(), amount));
        }

        if let Some(source) = self.accounts.get_mut(from) {
            let outcome = source.withdraw(amount);
            debug_assert!(outcome.is_completed());
        }
        if let Some(destination) = self.accounts.get_mut(to) {
            destination.deposit(amount);
        }

        self.console.print_line("[LOG] Transfer done");
        tracing::info!(from, to, amount = %amount, "transfer done");
        Ok(())
    }

    /// Store an independent copy of `owner`'s account under `owner + "_copy"`.
    ///
    /// Returns the key of the copy. A previous copy is overwritten.
    pub fn duplicate_account(&mut self, owner: &str) -> BankResult<String> {
        let Some(account) = self.accounts.get(owner) else {
            tracing::debug!(owner, "duplicate skipped: account not found");
            return Err(BankError::not_found(owner));
        };

        let key = format!("{owner}{COPY_SUFFIX}");
        let copy = account.duplicate();
        if self.accounts.insert(key.clone(), copy).is_some() {
            tracing::warn!(owner, key = %key, "previous copy overwritten");
        }

        self.console
            .print_line(&format!("[LOG] Account duplicated for {owner}"));
        tracing::info!(owner, key = %key, "account duplicated");
        Ok(key)
    }

    /// Print a header and one `<key> | <balance>` line per entry.
    pub fn print_accounts(&mut self) {
        self.console.print_line("=== Accounts ===");
        for (key, account) in &self.accounts {
            self.console
                .print_line(&format!("{key} | {}", account.balance()));
        }
    }

    pub fn account(&self, key: &str) -> Option<&Account> {
        self.accounts.get(key)
    }

    pub fn balance(&self, key: &str) -> Option<Money> {
        self.accounts.get(key).map(Account::balance)
    }

    pub fn accounts(&self) -> impl Iterator<Item = (&str, &Account)> {
        self.accounts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn snapshot(&self) -> Vec<AccountSnapshot> {
        self.accounts
            .iter()
            .map(|(key, account)| AccountSnapshot {
                key: key.clone(),
                owner: account.owner().to_string(),
                balance: account.balance(),
                variant: account.variant(),
            })
            .collect()
    }

    /// Pretty-printed JSON array of [`AccountSnapshot`]s.
    pub fn dump_json(&self) -> BankResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use crate::notify;
    use proptest::prelude::*;

    fn test_bank() -> Bank<Transcript> {
        Bank::new(Transcript::new())
    }

    fn money(amount: f64) -> Money {
        Money::new(amount)
    }

    #[test]
    fn construction_announces_start() {
        let bank = test_bank();
        assert!(bank.is_empty());
        assert_eq!(bank.console().lines(), ["Bank System Started"]);
    }

    #[test]
    fn open_then_deposit_updates_balance_and_notifies() {
        let mut bank = test_bank();
        bank.open_account("A", money(1000.0), false);

        let mut sent = Vec::new();
        let balance = bank
            .deposit("A", money(300.0), &mut |m: &str| sent.push(m.to_string()))
            .unwrap();

        assert_eq!(balance, money(1300.0));
        assert_eq!(bank.balance("A"), Some(money(1300.0)));
        assert_eq!(sent, ["A deposited 300.0"]);
        assert!(bank.console().contains("[LOG] Account opened for A"));
    }

    #[test]
    fn open_overwrites_existing_owner() {
        let mut bank = test_bank();
        assert!(bank.open_account("A", money(10.0), false).is_none());

        let replaced = bank.open_account("A", money(99.0), true).unwrap();
        assert_eq!(replaced.balance(), money(10.0));
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.balance("A"), Some(money(99.0)));
        assert!(bank.account("A").unwrap().is_premium());
    }

    #[test]
    fn covered_withdrawal_prints_no_warning() {
        let mut bank = test_bank();
        bank.open_account("S", money(2000.0), true);
        bank.console_mut().take();

        let mut sent = Vec::new();
        let balance = bank
            .withdraw("S", money(400.0), &mut |m: &str| sent.push(m.to_string()))
            .unwrap();

        assert_eq!(balance, money(1600.0));
        assert!(bank.console().lines().is_empty());
        assert_eq!(sent, ["S withdrew 400.0"]);
    }

    #[test]
    fn overdraw_warns_and_still_notifies() {
        let mut bank = test_bank();
        bank.open_account("S", money(100.0), false);
        bank.console_mut().take();

        let mut sent = Vec::new();
        let err = bank
            .withdraw("S", money(500.0), &mut |m: &str| sent.push(m.to_string()))
            .unwrap_err();

        assert_eq!(err, BankError::insufficient("S", money(100.0), money(500.0)));
        assert_eq!(bank.balance("S"), Some(money(100.0)));
        assert_eq!(bank.console().lines(), ["Insufficient balance"]);
        assert_eq!(sent, ["S withdrew 500.0"]);
    }

    #[test]
    fn unknown_owner_is_a_silent_no_op() {
        let mut bank = test_bank();
        bank.open_account("A", money(50.0), false);
        bank.console_mut().take();

        let mut sent = Vec::new();
        let mut record = |m: &str| sent.push(m.to_string());

        assert_eq!(
            bank.deposit("Ghost", money(10.0), &mut record),
            Err(BankError::not_found("Ghost"))
        );
        assert_eq!(
            bank.withdraw("Ghost", money(10.0), &mut record),
            Err(BankError::not_found("Ghost"))
        );
        assert_eq!(
            bank.duplicate_account("Ghost"),
            Err(BankError::not_found("Ghost"))
        );

        assert!(sent.is_empty());
        assert!(bank.console().lines().is_empty());
        assert_eq!(bank.len(), 1);
        assert!(bank.account("Ghost").is_none());
    }

    #[test]
    fn transfer_moves_funds_and_logs() {
        let mut bank = test_bank();
        bank.open_account("A", money(1300.0), false);
        bank.open_account("S", money(1600.0), true);

        bank.transfer("A", "S", money(200.0)).unwrap();

        assert_eq!(bank.balance("A"), Some(money(1100.0)));
        assert_eq!(bank.balance("S"), Some(money(1800.0)));
        assert_eq!(bank.console().last().as_deref(), Some("[LOG] Transfer done"));
    }

    #[test]
    fn failed_transfers_have_no_partial_effect() {
        let mut bank = test_bank();
        bank.open_account("A", money(100.0), false);
        bank.open_account("B", money(5.0), false);
        bank.console_mut().take();

        assert_eq!(
            bank.transfer("Ghost", "B", money(1.0)),
            Err(BankError::not_found("Ghost"))
        );
        assert_eq!(
            bank.transfer("A", "Ghost", money(1.0)),
            Err(BankError::not_found("Ghost"))
        );
        assert_eq!(
            bank.transfer("A", "B", money(100.01)),
            Err(BankError::insufficient("A", money(100.0), money(100.01)))
        );

        assert_eq!(bank.balance("A"), Some(money(100.0)));
        assert_eq!(bank.balance("B"), Some(money(5.0)));
        assert_eq!(bank.len(), 2);
        assert!(bank.console().lines().is_empty());
    }

    #[test]
    fn self_transfer_leaves_balance_unchanged() {
        let mut bank = test_bank();
        bank.open_account("A", money(100.0), false);

        bank.transfer("A", "A", money(40.0)).unwrap();
        assert_eq!(bank.balance("A"), Some(money(100.0)));
    }

    #[test]
    fn duplicate_is_independent_copy() {
        let mut bank = test_bank();
        bank.open_account("S", money(1600.0), true);

        let key = bank.duplicate_account("S").unwrap();
        assert_eq!(key, "S_copy");
        assert_eq!(bank.balance("S_copy"), Some(money(1600.0)));

        let copy = bank.account("S_copy").unwrap();
        assert_eq!(copy.owner(), "S");
        assert!(copy.is_premium());

        bank.deposit("S", money(400.0), &mut notify::silent()).unwrap();
        assert_eq!(bank.balance("S"), Some(money(2000.0)));
        assert_eq!(bank.balance("S_copy"), Some(money(1600.0)));
        assert!(bank.console().contains("[LOG] Account duplicated for S"));
    }

    #[test]
    fn duplicate_overwrites_previous_copy() {
        let mut bank = test_bank();
        bank.open_account("S", money(10.0), false);
        bank.duplicate_account("S").unwrap();
        bank.deposit("S", money(5.0), &mut notify::silent()).unwrap();
        bank.duplicate_account("S").unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.balance("S_copy"), Some(money(15.0)));
    }

    #[test]
    fn print_accounts_lists_entries_in_key_order() {
        let mut bank = test_bank();
        bank.open_account("Sara", money(1800.0), true);
        bank.open_account("Amine", money(1100.0), false);
        bank.duplicate_account("Sara").unwrap();
        bank.console_mut().take();

        bank.print_accounts();

        assert_eq!(
            bank.console().lines(),
            [
                "=== Accounts ===",
                "Amine | 1100.0",
                "Sara | 1800.0",
                "Sara_copy | 1800.0",
            ]
        );
    }

    #[test]
    fn dump_json_lists_snapshots() {
        let mut bank = test_bank();
        bank.open_account("S", money(12.5), true);
        bank.duplicate_account("S").unwrap();

        let json: serde_json::Value = serde_json::from_str(&bank.dump_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "key": "S", "owner": "S", "balance": 12.5, "variant": "premium" },
                { "key": "S_copy", "owner": "S", "balance": 12.5, "variant": "premium" },
            ])
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: transfers between two existing accounts never change the
        /// combined balance, whether or not they go through.
        #[test]
        fn transfers_conserve_total(
            a in 0i64..1_000_000i64,
            b in 0i64..1_000_000i64,
            moves in prop::collection::vec((any::<bool>(), 0i64..500_000i64), 0..20)
        ) {
            let mut bank = test_bank();
            bank.open_account("A", money(a as f64), false);
            bank.open_account("B", money(b as f64), true);
            let total = money((a + b) as f64);

            for (a_to_b, amount) in moves {
                let (from, to) = if a_to_b { ("A", "B") } else { ("B", "A") };
                let before = bank.balance(from).unwrap();
                let result = bank.transfer(from, to, money(amount as f64));
                prop_assert_eq!(result.is_ok(), before >= money(amount as f64));

                let sum: Money = bank.accounts().map(|(_, acc)| acc.balance()).sum();
                prop_assert_eq!(sum, total);
            }
        }

        /// Property: operations against unknown owners leave the registry
        /// exactly as it was.
        #[test]
        fn unknown_owner_operations_leave_registry_unchanged(
            amount in -10_000i64..10_000i64,
            name in "[a-z]{1,8}"
        ) {
            let mut bank = test_bank();
            bank.open_account("Known", money(500.0), false);
            let before = bank.snapshot();
            let ghost = format!("Ghost{name}");
            let amount = money(amount as f64);

            prop_assert!(bank.deposit(&ghost, amount, &mut notify::silent()).is_err());
            prop_assert!(bank.withdraw(&ghost, amount, &mut notify::silent()).is_err());
            prop_assert!(bank.transfer(&ghost, "Known", amount).is_err());
            prop_assert!(bank.transfer("Known", &ghost, money(0.0)).is_err());
            prop_assert!(bank.duplicate_account(&ghost).is_err());

            prop_assert_eq!(bank.snapshot(), before);
        }
    }
}
