/// Top-level error type for the balance engine.
///
/// The balance calculation itself cannot fail; errors only arise while
/// reading the CSV inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
