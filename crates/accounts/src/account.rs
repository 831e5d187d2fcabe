use serde::{Deserialize, Serialize};

use minibank_core::Money;

/// Account variant tag.
///
/// Carries no behavior yet; fee or interest rules would hang off it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountVariant {
    #[default]
    Standard,
    Premium,
}

impl AccountVariant {
    pub fn from_premium(is_premium: bool) -> Self {
        if is_premium {
            AccountVariant::Premium
        } else {
            AccountVariant::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountVariant::Standard => "standard",
            AccountVariant::Premium => "premium",
        }
    }
}

impl core::fmt::Display for AccountVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a guarded withdrawal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WithdrawOutcome {
    /// Funds were taken; `balance` is the new balance.
    Completed { balance: Money },
    /// Balance did not cover `requested` and was left untouched.
    Insufficient { balance: Money, requested: Money },
}

impl WithdrawOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, WithdrawOutcome::Completed { .. })
    }

    pub fn balance(&self) -> Money {
        match *self {
            WithdrawOutcome::Completed { balance } | WithdrawOutcome::Insufficient { balance, .. } => {
                balance
            }
        }
    }
}

/// A single owner's balance.
///
/// `Clone` is deliberately not derived: copies go through [`Account::duplicate`].
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    owner: String,
    balance: Money,
    variant: AccountVariant,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: Money, variant: AccountVariant) -> Self {
        Self {
            owner: owner.into(),
            balance,
            variant,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn variant(&self) -> AccountVariant {
        self.variant
    }

    pub fn is_premium(&self) -> bool {
        self.variant == AccountVariant::Premium
    }

    /// Whether the balance covers `amount`.
    pub fn can_cover(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    /// Add `amount` unconditionally (negative amounts included).
    pub fn deposit(&mut self, amount: Money) -> Money {
        self.balance += amount;
        self.balance
    }

    /// Subtract `amount` if the balance covers it; otherwise leave it as is.
    pub fn withdraw(&mut self, amount: Money) -> WithdrawOutcome {
        if !self.can_cover(amount) {
            return WithdrawOutcome::Insufficient {
                balance: self.balance,
                requested: amount,
            };
        }

        self.balance -= amount;
        WithdrawOutcome::Completed {
            balance: self.balance,
        }
    }

    /// Independent value copy: same owner, balance and variant.
    pub fn duplicate(&self) -> Account {
        Account {
            owner: self.owner.clone(),
            balance: self.balance,
            variant: self.variant,
        }
    }
}
