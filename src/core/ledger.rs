//! Ledger operations
//!
//! This module provides the `Ledger`: the public face of the crate.
//! It validates arguments before any lock is taken, acquires the
//! account lock(s) through the store's ordered primitives, performs the
//! bound checks under the lock, and mutates only once every check has
//! passed. Guards are released by scope on every exit path, so no call
//! can return, successfully or not, while still holding a lock.
//!
//! The ledger enforces two invariants between operations:
//! - every balance stays within `[0, max_amount]`
//! - the total changes only by the net effect of committed deposits
//!   and withdrawals; transfers conserve it exactly

use crate::core::store::AccountStore;
use crate::types::{AccountIndex, Balance, LedgerError};
use tracing::debug;

/// Fixed-size collection of lock-guarded accounts
///
/// All operations take `&self`; the ledger is shared between threads by
/// reference (or `Arc`) and every balance access is serialized by the
/// owning account's mutex. Contended calls block until the lock is
/// granted; nothing is dropped or rescheduled.
pub struct Ledger {
    store: AccountStore,
    max_amount: Balance,
}

impl Ledger {
    /// Create a ledger with `accounts` accounts, all with balance zero
    ///
    /// The maximum balance defaults to `Balance::MAX`.
    pub fn new(accounts: usize) -> Self {
        Self::with_max_amount(accounts, Balance::MAX)
    }

    /// Create a ledger with an explicit maximum balance
    ///
    /// Deposits and transfers are rejected with `Overflow` when they
    /// would push the destination balance above `max_amount`.
    pub fn with_max_amount(accounts: usize, max_amount: Balance) -> Self {
        Ledger {
            store: AccountStore::new(accounts),
            max_amount,
        }
    }

    /// Number of accounts in the ledger
    ///
    /// Fixed at construction; no locking needed.
    pub fn account_count(&self) -> usize {
        self.store.len()
    }

    /// Largest balance any account may hold
    pub fn max_amount(&self) -> Balance {
        self.max_amount
    }

    /// Read one account's balance under its lock
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is invalid.
    pub fn balance_of(&self, index: AccountIndex) -> Result<Balance, LedgerError> {
        Ok(*self.store.lock_one(index)?)
    }

    /// Sum of all balances, read as a consistent snapshot
    ///
    /// Acquires every account lock in ascending index order, sums, and
    /// releases. While the full lock set is held no other operation can
    /// touch any balance, so the returned total corresponds to a real
    /// instant in the serialization of all operations, never a torn
    /// sum. This is the only operation that holds more than two locks.
    pub fn total_balance(&self) -> Balance {
        let guards = self.store.lock_all();
        guards.iter().map(|guard| **guard).sum()
    }

    /// Credit `amount` to one account
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0` (checked before locking)
    /// - `IndexOutOfRange` if `index` is invalid
    /// - `Overflow` if the balance would exceed the ledger maximum;
    ///   the balance is unchanged
    pub fn deposit(&self, index: AccountIndex, amount: Balance) -> Result<Balance, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }
        let mut balance = self.store.lock_one(index)?;
        let updated = balance
            .checked_add(amount)
            .filter(|credited| *credited <= self.max_amount)
            .ok_or_else(|| {
                debug!(index, balance = *balance, amount, "deposit rejected: overflow");
                LedgerError::overflow(index, *balance, amount)
            })?;
        *balance = updated;
        Ok(updated)
    }

    /// Debit `amount` from one account
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0` (checked before locking)
    /// - `IndexOutOfRange` if `index` is invalid
    /// - `Underflow` if the balance is smaller than `amount`;
    ///   the balance is unchanged
    pub fn withdraw(&self, index: AccountIndex, amount: Balance) -> Result<Balance, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }
        let mut balance = self.store.lock_one(index)?;
        if amount > *balance {
            debug!(index, balance = *balance, amount, "withdraw rejected: underflow");
            return Err(LedgerError::underflow(index, *balance, amount));
        }
        *balance -= amount;
        Ok(*balance)
    }

    /// Move `amount` from one account to another atomically
    ///
    /// Both locks are acquired in ascending index order before any
    /// check against the balances, and both mutations happen under
    /// both locks, so no concurrent operation can observe the debit
    /// without the credit or vice versa. The total is conserved
    /// exactly.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0` (checked before locking)
    /// - `SameAccount` if `from == to` (checked before locking)
    /// - `IndexOutOfRange` if either index is invalid
    /// - `Underflow` if the source balance is smaller than `amount`
    /// - `Overflow` if the destination would exceed the ledger maximum
    ///
    /// On every failure both balances are left exactly as they were.
    pub fn transfer(
        &self,
        from: AccountIndex,
        to: AccountIndex,
        amount: Balance,
    ) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }
        if from == to {
            return Err(LedgerError::same_account(from));
        }
        let (mut from_balance, mut to_balance) = self.store.lock_pair(from, to)?;
        if amount > *from_balance {
            debug!(
                from,
                to,
                balance = *from_balance,
                amount,
                "transfer rejected: underflow"
            );
            return Err(LedgerError::underflow(from, *from_balance, amount));
        }
        let credited = to_balance
            .checked_add(amount)
            .filter(|credited| *credited <= self.max_amount)
            .ok_or_else(|| {
                debug!(
                    from,
                    to,
                    balance = *to_balance,
                    amount,
                    "transfer rejected: overflow"
                );
                LedgerError::overflow(to, *to_balance, amount)
            })?;
        *from_balance -= amount;
        *to_balance = credited;
        Ok(())
    }
}
