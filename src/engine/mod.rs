//! Balance engine module.
//!
//! This module contains the core balance calculation logic including:
//! - `compute_balance` - The pure balance reduction over transactions and disputes
//! - `BalanceEngine` - CSV-fed wrapper around the calculator
//! - `Transaction` - Input transaction record
//! - `Error` types - I/O and CSV parsing errors

mod balance;
mod currency;
mod dispute;
mod error;
mod transaction;

pub(crate) use rust_decimal::Decimal;

pub use balance::{compute_balance, BalanceEngine};
pub use error::Error;
pub use transaction::Transaction;
