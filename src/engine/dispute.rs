use serde::Deserialize;

/// Raw disputed-id row as parsed from the disputes CSV input.
///
/// A dispute references a transaction by id and carries nothing else.
/// Duplicate rows and ids that match no transaction are permitted; both
/// collapse to at most one exclusion when the balance is computed.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DisputeRecord {
    pub(crate) id: String,
}
