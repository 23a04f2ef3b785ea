//! Account-related types for the ledger engine
//!
//! This module defines the Account structure: a single balance slot
//! guarded by its own mutex. The mutex is owned by the account and
//! protects that account's balance and nothing else.

use parking_lot::Mutex;

/// Account balance in minor currency units
///
/// Balances are signed so that bound checks can be written naturally,
/// but the ledger never lets a committed balance leave `[0, max_amount]`.
pub type Balance = i64;

/// Account index within a ledger
///
/// Accounts are addressed by position, `0 <= index < account_count`.
pub type AccountIndex = usize;

/// A single lock-guarded balance slot
///
/// The account owns its mutex. Every read or write of the balance goes
/// through this mutex; the ledger's multi-account operations acquire
/// several of these in ascending index order.
#[derive(Debug)]
pub struct Account {
    /// Current balance, readable and writable only under the lock
    pub(crate) balance: Mutex<Balance>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new() -> Self {
        Account {
            balance: Mutex::new(0),
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}
