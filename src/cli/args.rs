use crate::types::Balance;
use crate::workload::WorkloadConfig;
use clap::Parser;

/// Stress-test a concurrent in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "ledger-stress")]
#[command(about = "Hammer an in-memory ledger from many threads and verify conservation", long_about = None)]
pub struct CliArgs {
    /// Number of accounts in the ledger
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = 8,
        help = "Number of accounts (minimum 2 for transfers to occur)"
    )]
    pub accounts: usize,

    /// Number of worker threads
    #[arg(
        long,
        value_name = "COUNT",
        help = "Number of worker threads (default: CPU cores)"
    )]
    pub threads: Option<usize>,

    /// Transfers attempted per worker thread
    #[arg(
        long = "transfers",
        value_name = "COUNT",
        default_value_t = 10_000,
        help = "Transfers attempted by each worker thread"
    )]
    pub transfers_per_thread: u64,

    /// Balance deposited into every account before the run
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value_t = 1_000_000,
        help = "Balance deposited into every account before the run"
    )]
    pub initial_balance: Balance,

    /// Maximum balance any account may hold
    #[arg(
        long = "max-amount",
        value_name = "AMOUNT",
        help = "Maximum balance any account may hold (default: no practical limit)"
    )]
    pub max_amount: Option<Balance>,

    /// Base RNG seed for reproducible runs
    #[arg(
        long,
        value_name = "SEED",
        default_value_t = 0x5eed,
        help = "Base RNG seed; each worker derives its own stream"
    )]
    pub seed: u64,
}

impl CliArgs {
    /// Create a WorkloadConfig from CLI arguments
    ///
    /// Fills in the thread count from the CPU count when not given and
    /// warns on argument combinations that make the run degenerate
    /// (fewer than two accounts means no transfer can ever happen).
    pub fn to_workload_config(&self) -> WorkloadConfig {
        if self.accounts < 2 {
            eprintln!(
                "Warning: {} account(s) configured; transfers need at least 2, workers will idle",
                self.accounts
            );
        }
        WorkloadConfig {
            accounts: self.accounts,
            threads: self.threads.unwrap_or_else(num_cpus::get),
            transfers_per_thread: self.transfers_per_thread,
            initial_balance: self.initial_balance,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.accounts, 8);
        assert_eq!(parsed.threads, None);
        assert_eq!(parsed.transfers_per_thread, 10_000);
        assert_eq!(parsed.initial_balance, 1_000_000);
        assert_eq!(parsed.max_amount, None);
        assert_eq!(parsed.seed, 0x5eed);
    }

    #[rstest]
    #[case::accounts(&["program", "--accounts", "32"], 32, None)]
    #[case::threads(&["program", "--threads", "4"], 8, Some(4))]
    #[case::both(&["program", "--accounts", "2", "--threads", "16"], 2, Some(16))]
    fn test_accounts_and_threads(
        #[case] args: &[&str],
        #[case] accounts: usize,
        #[case] threads: Option<usize>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.accounts, accounts);
        assert_eq!(parsed.threads, threads);
    }

    #[test]
    fn test_amount_options() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--transfers",
            "500",
            "--initial-balance",
            "250",
            "--max-amount",
            "1000",
            "--seed",
            "99",
        ])
        .unwrap();
        assert_eq!(parsed.transfers_per_thread, 500);
        assert_eq!(parsed.initial_balance, 250);
        assert_eq!(parsed.max_amount, Some(1000));
        assert_eq!(parsed.seed, 99);
    }

    #[test]
    fn test_to_workload_config_uses_cpu_count_by_default() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        let config = parsed.to_workload_config();
        assert_eq!(config.threads, num_cpus::get());
        assert_eq!(config.accounts, 8);
    }

    #[test]
    fn test_to_workload_config_keeps_explicit_threads() {
        let parsed = CliArgs::try_parse_from(["program", "--threads", "3"]).unwrap();
        assert_eq!(parsed.to_workload_config().threads, 3);
    }
}
