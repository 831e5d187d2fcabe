//! Accounts module (single-owner balances).
//!
//! Pure domain logic only: no IO, no console, no registry concerns.

pub mod account;
pub mod factory;

pub use account::{Account, AccountVariant, WithdrawOutcome};
pub use factory::AccountFactory;
