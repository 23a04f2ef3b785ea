//! Randomized concurrent workload runner
//!
//! This module drives a ledger from many OS threads at once: each
//! worker performs a stream of transfers between randomly chosen
//! distinct accounts, with periodic full-snapshot reads mixed in to
//! exercise the all-locks path. It is the runnable form of the crate's
//! two headline properties:
//!
//! - **Deadlock freedom**: every worker completes, no matter how the
//!   transfer pairs overlap, because all locks are taken in ascending
//!   index order.
//! - **Conservation**: transfers never change the total, so the final
//!   total must equal the seeded total exactly.
//!
//! The stress binary and the integration tests both run workloads
//! through this module.

use crate::core::Ledger;
use crate::types::{Balance, LedgerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use tracing::info;

/// How often each worker takes a full snapshot, in operations
const SNAPSHOT_INTERVAL: u64 = 1024;

/// Parameters for a workload run
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of accounts in the ledger under test
    pub accounts: usize,
    /// Number of worker threads
    pub threads: usize,
    /// Transfers attempted by each worker
    pub transfers_per_thread: u64,
    /// Balance deposited into every account before the run
    pub initial_balance: Balance,
    /// Base RNG seed; each worker derives its own stream from it
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        WorkloadConfig {
            accounts: 8,
            threads: num_cpus::get(),
            transfers_per_thread: 10_000,
            initial_balance: 1_000_000,
            seed: 0x5eed,
        }
    }
}

/// Outcome of a workload run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadReport {
    /// Transfers that committed
    pub committed: u64,
    /// Transfers rejected by a bound check
    pub rejected: u64,
    /// Full-snapshot reads taken during the run
    pub snapshots: u64,
    /// `total_balance()` after all workers finished
    pub final_total: Balance,
    /// Sum of all seed deposits; conservation holds iff this equals
    /// `final_total`
    pub expected_total: Balance,
}

impl WorkloadReport {
    /// Whether the run conserved the total
    pub fn conserved(&self) -> bool {
        self.final_total == self.expected_total
    }
}

/// Seed the ledger and hammer it from `config.threads` workers
///
/// Workers pick `from`/`to` uniformly among distinct account pairs and
/// amounts in `1..=initial_balance`; rejected transfers (underflow or
/// overflow against the ledger maximum) are counted, not retried.
/// Requires a ledger with at least two accounts for any transfer to be
/// attempted; with fewer, workers finish immediately.
///
/// # Errors
///
/// Returns an error if seeding fails, e.g. when `initial_balance`
/// exceeds the ledger's maximum balance.
pub fn run(ledger: &Ledger, config: &WorkloadConfig) -> Result<WorkloadReport, LedgerError> {
    let count = ledger.account_count();
    let mut expected_total: Balance = 0;
    if config.initial_balance > 0 {
        for index in 0..count {
            ledger.deposit(index, config.initial_balance)?;
            expected_total += config.initial_balance;
        }
    }

    let per_worker: Vec<(u64, u64, u64)> = thread::scope(|scope| {
        let workers: Vec<_> = (0..config.threads)
            .map(|worker| {
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(worker as u64));
                    let mut committed = 0u64;
                    let mut rejected = 0u64;
                    let mut snapshots = 0u64;
                    if count < 2 {
                        return (committed, rejected, snapshots);
                    }
                    for op in 0..config.transfers_per_thread {
                        let from = rng.gen_range(0..count);
                        let mut to = rng.gen_range(0..count);
                        if to == from {
                            to = (to + 1) % count;
                        }
                        let amount = rng.gen_range(1..=config.initial_balance.max(1));
                        match ledger.transfer(from, to, amount) {
                            Ok(()) => committed += 1,
                            Err(_) => rejected += 1,
                        }
                        if op % SNAPSHOT_INTERVAL == 0 {
                            let _ = ledger.total_balance();
                            snapshots += 1;
                        }
                    }
                    (committed, rejected, snapshots)
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("workload worker panicked"))
            .collect()
    });

    let mut report = WorkloadReport {
        committed: 0,
        rejected: 0,
        snapshots: 0,
        final_total: ledger.total_balance(),
        expected_total,
    };
    for (committed, rejected, snapshots) in per_worker {
        report.committed += committed;
        report.rejected += rejected;
        report.snapshots += snapshots;
    }
    info!(
        committed = report.committed,
        rejected = report.rejected,
        snapshots = report.snapshots,
        final_total = report.final_total,
        "workload finished"
    );
    Ok(report)
}
