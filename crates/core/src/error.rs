//! Domain error model.

use thiserror::Error;

use crate::money::Money;

/// Result type used across the bank domain.
pub type BankResult<T> = Result<T, BankError>;

/// Domain-level error.
///
/// Every variant is a deterministic business outcome. None of them is printed
/// by the registry except `InsufficientFunds` on a direct withdrawal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BankError {
    /// No account is registered under the given key.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// The account balance does not cover the requested amount.
    #[error("Insufficient balance")]
    InsufficientFunds {
        owner: String,
        balance: Money,
        requested: Money,
    },

    /// A registry snapshot could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl BankError {
    pub fn not_found(owner: impl Into<String>) -> Self {
        Self::AccountNotFound(owner.into())
    }

    pub fn insufficient(owner: impl Into<String>, balance: Money, requested: Money) -> Self {
        Self::InsufficientFunds {
            owner: owner.into(),
            balance,
            requested,
        }
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
