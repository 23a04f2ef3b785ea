//! Error types for the ledger engine
//!
//! This module defines all error types that a ledger operation can
//! return. Errors are synchronous and carry enough context to diagnose
//! the rejected call; a failed operation never mutates any balance.
//!
//! # Error Categories
//!
//! - **Argument Errors**: non-positive amounts, identical transfer
//!   endpoints — detected before any lock is taken.
//! - **Addressing Errors**: account index outside the ledger.
//! - **Bound Errors**: overflow above the ledger's maximum balance,
//!   underflow below zero — detected under the account lock(s).

use crate::types::account::Balance;
use thiserror::Error;

/// Main error type for the ledger engine
///
/// Each variant includes the context needed to understand why the
/// operation was rejected. All variants are recoverable from the
/// caller's point of view: the ledger state is exactly as it was
/// before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative
    ///
    /// Deposits, withdrawals and transfers all require a strictly
    /// positive amount. Detected before any lock is acquired.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Balance,
    },

    /// Transfer source and destination are the same account
    ///
    /// A transfer needs two distinct accounts; locking the same account
    /// twice is never attempted. Detected before any lock is acquired.
    #[error("Transfer source and destination are both account {index}")]
    SameAccount {
        /// The index supplied for both endpoints
        index: usize,
    },

    /// Account index outside the ledger
    ///
    /// Valid indices are `0 <= index < len`, fixed at construction.
    #[error("Account index {index} out of range (ledger has {len} accounts)")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of accounts in the ledger
        len: usize,
    },

    /// Crediting would push the balance above the ledger maximum
    ///
    /// The account balance is unchanged; for transfers, the source
    /// balance is unchanged as well.
    #[error("Overflow on account {index}: balance {balance} + {amount} exceeds the maximum")]
    Overflow {
        /// Account that would overflow
        index: usize,
        /// Balance at the time of the check
        balance: Balance,
        /// Amount that was being credited
        amount: Balance,
    },

    /// Debiting would push the balance below zero
    ///
    /// The account balance is unchanged; for transfers, the destination
    /// balance is unchanged as well.
    #[error("Underflow on account {index}: balance {balance} is less than {amount}")]
    Underflow {
        /// Account that would underflow
        index: usize,
        /// Balance at the time of the check
        balance: Balance,
        /// Amount that was being debited
        amount: Balance,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Balance) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create a SameAccount error
    pub fn same_account(index: usize) -> Self {
        LedgerError::SameAccount { index }
    }

    /// Create an IndexOutOfRange error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        LedgerError::IndexOutOfRange { index, len }
    }

    /// Create an Overflow error
    pub fn overflow(index: usize, balance: Balance, amount: Balance) -> Self {
        LedgerError::Overflow {
            index,
            balance,
            amount,
        }
    }

    /// Create an Underflow error
    pub fn underflow(index: usize, balance: Balance, amount: Balance) -> Self {
        LedgerError::Underflow {
            index,
            balance,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: -5 },
        "Invalid amount: -5"
    )]
    #[case::same_account(
        LedgerError::SameAccount { index: 3 },
        "Transfer source and destination are both account 3"
    )]
    #[case::index_out_of_range(
        LedgerError::IndexOutOfRange { index: 7, len: 4 },
        "Account index 7 out of range (ledger has 4 accounts)"
    )]
    #[case::overflow(
        LedgerError::Overflow { index: 0, balance: 900, amount: 200 },
        "Overflow on account 0: balance 900 + 200 exceeds the maximum"
    )]
    #[case::underflow(
        LedgerError::Underflow { index: 1, balance: 100, amount: 150 },
        "Underflow on account 1: balance 100 is less than 150"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        LedgerError::invalid_amount(0),
        LedgerError::InvalidAmount { amount: 0 }
    )]
    #[case::same_account(
        LedgerError::same_account(2),
        LedgerError::SameAccount { index: 2 }
    )]
    #[case::index_out_of_range(
        LedgerError::index_out_of_range(9, 8),
        LedgerError::IndexOutOfRange { index: 9, len: 8 }
    )]
    #[case::overflow(
        LedgerError::overflow(0, 1, 2),
        LedgerError::Overflow { index: 0, balance: 1, amount: 2 }
    )]
    #[case::underflow(
        LedgerError::underflow(1, 2, 3),
        LedgerError::Underflow { index: 1, balance: 2, amount: 3 }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }
}
