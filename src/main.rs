//! Ledger Stress CLI
//!
//! Command-line driver that hammers an in-memory ledger from many
//! threads and verifies that the total is conserved.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release
//! cargo run --release -- --accounts 16 --threads 8 --transfers 100000
//! cargo run --release -- --max-amount 1000 --initial-balance 500
//! ```
//!
//! The program seeds every account with the initial balance, runs the
//! configured number of random transfers per worker thread, and then
//! checks the final total against the seeded total. Transfers conserve
//! the total, so any difference means a lost or torn update.
//!
//! # Exit Codes
//!
//! - 0: run completed and the total was conserved
//! - 1: setup failed or the final total did not match

use rust_ledger_engine::cli;
use rust_ledger_engine::workload;
use rust_ledger_engine::Ledger;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::parse_args();
    let config = args.to_workload_config();

    let ledger = match args.max_amount {
        Some(max_amount) => Ledger::with_max_amount(config.accounts, max_amount),
        None => Ledger::new(config.accounts),
    };

    let report = match workload::run(&ledger, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!(
        "accounts={} threads={} committed={} rejected={} snapshots={}",
        config.accounts, config.threads, report.committed, report.rejected, report.snapshots
    );
    println!(
        "final total: {} (expected {})",
        report.final_total, report.expected_total
    );

    if !report.conserved() {
        eprintln!("Error: total not conserved");
        process::exit(1);
    }
}
