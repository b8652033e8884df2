mod commands;

use anyhow::{Context, Result};
use balance_engine::BalanceEngine;
use clap::Parser;
use commands::Args;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Initialize the BalanceEngine
    let mut engine = BalanceEngine::new();

    // 2. Open and load the transactions file
    log::info!(
        "Loading transactions from {}",
        args.transactions_file.display()
    );
    let file = std::fs::File::open(&args.transactions_file).with_context(|| {
        format!(
            "Failed to open transactions file: {}",
            args.transactions_file.display()
        )
    })?;

    engine
        .load_transactions(file)
        .context("Failed to load transactions")?;

    // 3. Open and load the disputes file, if one was given
    if let Some(path) = &args.disputes {
        log::info!("Loading disputes from {}", path.display());
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open disputes file: {}", path.display()))?;

        engine
            .load_disputes(file)
            .context("Failed to load disputes")?;
    }

    log::info!(
        "Computing balance over {} transactions ({} disputed ids)",
        engine.transaction_count(),
        engine.dispute_count()
    );

    // 4. Print the USD balance to stdout
    println!("{:.2}", engine.balance());

    Ok(())
}
