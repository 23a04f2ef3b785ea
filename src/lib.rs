//! Rust Ledger Engine Library
//! # Overview
//!
//! This library provides an in-memory ledger of a fixed number of
//! accounts, safe to call from many threads at once. Each account is
//! guarded by its own mutex, and every operation that needs more than
//! one lock acquires them in ascending account-index order, so no mix
//! of concurrent deposits, withdrawals, transfers and snapshot reads
//! can deadlock.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Balance, LedgerError)
//! - [`core`] - Concurrency core:
//!   - [`core::store`] - Account storage and ordered lock acquisition
//!   - [`core::ledger`] - Public ledger operations
//! - [`workload`] - Randomized concurrent workload runner
//! - [`cli`] - CLI argument parsing for the stress binary
//!
//! # Operations
//!
//! - **Deposit**: credit one account (rejects amounts that would push
//!   the balance above the ledger maximum)
//! - **Withdraw**: debit one account (rejects amounts larger than the
//!   balance)
//! - **Transfer**: move funds between two accounts atomically, with
//!   both locks held for the whole check-then-mutate sequence
//! - **Balance reads**: one account under its lock, or the exact total
//!   under every lock at once
//!
//! # Guarantees
//!
//! - No committed balance ever leaves `[0, max_amount]`
//! - A failed call leaves every balance exactly as it was
//! - Transfers conserve the total; `total_balance` never observes a
//!   torn sum

// Module declarations
pub mod cli;
pub mod core;
pub mod types;
pub mod workload;

pub use crate::core::{AccountStore, Ledger};
pub use crate::types::{Account, AccountIndex, Balance, LedgerError};
pub use crate::workload::{WorkloadConfig, WorkloadReport};
