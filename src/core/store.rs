//! Account store and lock-acquisition primitives
//!
//! This module provides the `AccountStore`: the fixed-length,
//! index-addressed set of accounts, together with the primitives that
//! acquire more than one account lock at a time.
//!
//! Every multi-lock acquisition in the crate goes through this module,
//! and every one of them takes locks in ascending index order. Two
//! concurrent operations that need an overlapping lock set therefore
//! always request the shared locks in the same relative order, so no
//! circular wait can form. This ordering rule is the single
//! deadlock-avoidance mechanism in the crate; there is no try-lock,
//! backoff, or global mutex.

use crate::types::{Account, AccountIndex, Balance, LedgerError};
use parking_lot::MutexGuard;

/// Fixed set of accounts, addressed by index
///
/// The store owns every account; the number of accounts is fixed at
/// construction and the vector is never resized, so `len` and element
/// addresses can be read without locking.
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create a store with `len` accounts, all with balance zero
    pub fn new(len: usize) -> Self {
        AccountStore {
            accounts: (0..len).map(|_| Account::new()).collect(),
        }
    }

    /// Number of accounts in the store
    ///
    /// Immutable after construction; no locking needed.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Look up an account by index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len`.
    pub fn account(&self, index: AccountIndex) -> Result<&Account, LedgerError> {
        self.accounts
            .get(index)
            .ok_or_else(|| LedgerError::index_out_of_range(index, self.accounts.len()))
    }

    /// Acquire one account's lock and return the balance guard
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len`.
    pub fn lock_one(&self, index: AccountIndex) -> Result<MutexGuard<'_, Balance>, LedgerError> {
        Ok(self.account(index)?.balance.lock())
    }

    /// Acquire two account locks in ascending index order
    ///
    /// The returned guards are mapped back to argument order: the first
    /// guard always belongs to `first`, the second to `second`,
    /// regardless of which lock was physically taken first.
    ///
    /// The indices must be distinct; locking the same account twice
    /// would self-deadlock. Callers validate this before calling.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is invalid; in that
    /// case no lock is taken.
    pub fn lock_pair(
        &self,
        first: AccountIndex,
        second: AccountIndex,
    ) -> Result<(MutexGuard<'_, Balance>, MutexGuard<'_, Balance>), LedgerError> {
        debug_assert_ne!(first, second, "lock_pair requires distinct indices");
        let a = self.account(first)?;
        let b = self.account(second)?;
        // Lower index first, always.
        if first < second {
            let guard_a = a.balance.lock();
            let guard_b = b.balance.lock();
            Ok((guard_a, guard_b))
        } else {
            let guard_b = b.balance.lock();
            let guard_a = a.balance.lock();
            Ok((guard_a, guard_b))
        }
    }

    /// Acquire every account lock in ascending index order
    ///
    /// Returns the full guard set; while it is held no other operation
    /// can mutate any balance, so the caller observes a true snapshot.
    /// Guards are released when the vector is dropped; release order
    /// does not matter for deadlock avoidance, only acquisition order
    /// does.
    pub fn lock_all(&self) -> Vec<MutexGuard<'_, Balance>> {
        self.accounts
            .iter()
            .map(|account| account.balance.lock())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_has_len_accounts() {
        let store = AccountStore::new(5);
        assert_eq!(store.len(), 5);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = AccountStore::new(0);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.lock_all().is_empty());
    }

    #[test]
    fn test_account_out_of_range() {
        let store = AccountStore::new(3);
        let err = store.account(3).unwrap_err();
        assert_eq!(err, LedgerError::IndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_lock_one_reads_balance() {
        let store = AccountStore::new(2);
        assert_eq!(*store.lock_one(0).unwrap(), 0);
        assert_eq!(*store.lock_one(1).unwrap(), 0);
    }

    #[test]
    fn test_lock_pair_guards_match_argument_order() {
        let store = AccountStore::new(4);
        {
            let (mut first, mut second) = store.lock_pair(2, 1).unwrap();
            *first = 20;
            *second = 10;
        }
        assert_eq!(*store.lock_one(2).unwrap(), 20);
        assert_eq!(*store.lock_one(1).unwrap(), 10);
    }

    #[test]
    fn test_lock_pair_rejects_bad_index_without_locking() {
        let store = AccountStore::new(2);
        assert!(store.lock_pair(0, 5).is_err());
        // Both accounts must still be lockable.
        let (a, b) = store.lock_pair(0, 1).unwrap();
        assert_eq!(*a, 0);
        assert_eq!(*b, 0);
    }

    #[test]
    fn test_lock_all_covers_every_account() {
        let store = AccountStore::new(8);
        for i in 0..8 {
            *store.lock_one(i).unwrap() = i as Balance;
        }
        let guards = store.lock_all();
        assert_eq!(guards.len(), 8);
        let sum: Balance = guards.iter().map(|g| **g).sum();
        assert_eq!(sum, 28);
    }
}
