use std::collections::HashSet;
use std::io::Read;

use super::currency::to_usd;
use super::dispute::DisputeRecord;
use super::error::Error;
use super::transaction::Transaction;
use super::Decimal;
use rust_decimal::RoundingStrategy;

/// Compute the net USD balance of `transactions`, skipping every
/// transaction whose id appears in `disputed_ids`.
///
/// Each non-disputed amount is converted with the fixed USD multiplier
/// table and the sum is rounded to two decimal places, midpoints away
/// from zero. Disputed ids that match no transaction are ignored and
/// duplicate ids have no effect beyond a single exclusion.
///
/// The function is pure: it holds no state, performs no I/O and never
/// fails. Reordering `transactions` does not change the result.
pub fn compute_balance<S: AsRef<str>>(transactions: &[Transaction], disputed_ids: &[S]) -> Decimal {
    let disputed: HashSet<&str> = disputed_ids.iter().map(AsRef::as_ref).collect();

    let mut total = Decimal::ZERO;
    for transaction in transactions {
        if disputed.contains(transaction.id()) {
            log::trace!("[balance] excluded disputed {transaction}");
            continue;
        }
        total += to_usd(transaction.amount(), transaction.currency());
    }

    total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// CSV-fed wrapper around [`compute_balance`].
///
/// Accumulates transactions and disputed ids from any `Read` source and
/// reports the resulting balance. The engine keeps no state beyond the
/// two input collections; loading is cumulative and may happen in any
/// order.
#[derive(Debug, Default)]
pub struct BalanceEngine {
    /// Transactions in input order
    transactions: Vec<Transaction>,
    /// Disputed transaction ids (duplicates collapse)
    disputes: HashSet<String>,
}

impl BalanceEngine {
    /// Create a new `BalanceEngine` with no transactions and no disputes
    pub fn new() -> Self {
        log::trace!("BalanceEngine initialized");
        Self::default()
    }

    /// Primary API: Load transactions from any source (File, `TcpStream`, etc.)
    /// Expects CSV input with an `id,amount,currency` header row.
    /// Note that the CSV reader is buffered automatically, so you should not wrap rdr in a buffered reader like `io::BufReader`.
    pub fn load_transactions<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All) // trim whitespace from fields
            .from_reader(reader);

        let mut loaded = 0u64;
        for result in csv_reader.deserialize() {
            let transaction: Transaction = result?;
            loaded += 1;
            log::trace!("[row {loaded}] {transaction}");
            self.transactions.push(transaction);
        }

        log::info!(
            "Loaded {} transactions ({} total)",
            loaded,
            self.transactions.len()
        );
        Ok(())
    }

    /// Load disputed transaction ids from any source.
    /// Expects CSV input with a single `id` header row; duplicate ids collapse.
    pub fn load_disputes<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut inserted = 0u64;
        let mut duplicates = 0u64;
        for result in csv_reader.deserialize() {
            let record: DisputeRecord = result?;
            log::trace!("[dispute] id={}", record.id);
            if self.disputes.insert(record.id) {
                inserted += 1;
            } else {
                duplicates += 1;
            }
        }

        log::info!(
            "Loaded {} disputed ids ({} duplicates collapsed, {} total)",
            inserted,
            duplicates,
            self.disputes.len()
        );
        Ok(())
    }

    /// The USD balance over everything loaded so far.
    pub fn balance(&self) -> Decimal {
        let disputed: Vec<&str> = self.disputes.iter().map(String::as_str).collect();
        compute_balance(&self.transactions, &disputed)
    }

    /// Returns the number of loaded transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Returns the number of distinct disputed ids
    pub fn dispute_count(&self) -> usize {
        self.disputes.len()
    }
}
