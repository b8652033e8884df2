//! A balance calculator for transaction lists with disputes.
//!
//! Given a sequence of transactions and a collection of disputed
//! transaction ids, the engine reports the net balance in USD, skipping
//! every disputed transaction. Amounts in other currencies are converted
//! with a fixed multiplier table and the result is rounded to two decimal
//! places.
//!
//! The core is the pure [`compute_balance`] function; [`BalanceEngine`]
//! wraps it with CSV ingestion for callers that read their inputs from
//! files or streams.
//!
//! ```
//! use balance_engine::{compute_balance, Transaction};
//! use rust_decimal::Decimal;
//!
//! let transactions = vec![
//!     Transaction::new("1a", Decimal::new(10, 0), "USD"),
//!     Transaction::new("1b", Decimal::new(15, 0), "CAD"),
//! ];
//!
//! // "1b" is disputed, so only the USD charge counts.
//! let balance = compute_balance(&transactions, &["1b"]);
//! assert_eq!(balance, Decimal::new(10, 0));
//! ```

mod engine;

pub use engine::{compute_balance, BalanceEngine, Error, Transaction};
