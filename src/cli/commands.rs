pub(crate) use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "balance-engine",
    author,
    version,
    about = "Computes the USD balance of a transaction list, net of disputes",
    long_about = None,
    after_help = "OUTPUT:\n    The rounded USD balance is printed to stdout.\n\n    balance-engine transactions.csv --disputes disputes.csv"
)]
pub struct Args {
    /// Path to the input transactions CSV file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input CSV file with columns: id, amount, currency"
    )]
    pub transactions_file: PathBuf,

    /// Path to the disputed transaction ids CSV file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "CSV file with a single id column; omit to dispute nothing"
    )]
    pub disputes: Option<PathBuf>,
}
