//! `minibank-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O concerns).

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{BankError, BankResult};
pub use money::Money;
pub use value_object::ValueObject;
