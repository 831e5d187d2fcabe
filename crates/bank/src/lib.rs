//! `minibank-bank`: the account registry and its output glue.
//!
//! - `registry`: owner-keyed account map with the balance-mutation contract
//! - `console`: line sink for the registry's human-readable output
//! - `notify`: function-typed notification capability

pub mod console;
pub mod notify;
pub mod registry;

pub use console::{Console, Stdout, Transcript};
pub use registry::{AccountSnapshot, Bank, COPY_SUFFIX};
