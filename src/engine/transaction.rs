use super::Decimal;
use serde::Deserialize;

/// A single financial transaction.
///
/// The sign of `amount` carries the direction: positive for a charge,
/// negative for a refund. `currency` is a free-form code denominating the
/// amount; codes the conversion table does not recognize are treated as
/// already being in the reference currency.
///
/// Ids are conceptually unique within an input sequence, but uniqueness is
/// never enforced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    id: String,
    amount: Decimal,
    currency: String,
}

impl Transaction {
    /// Create a new transaction record.
    pub fn new(id: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount,
            currency: currency.into(),
        }
    }

    /// Returns the transaction identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the signed amount in the transaction's own currency
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code the amount is denominated in
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[transaction] id={} amount={} currency={}",
            self.id, self.amount, self.currency
        )
    }
}
