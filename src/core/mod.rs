//! Core ledger module
//!
//! This module contains the concurrency core of the crate:
//! - `store` - Account storage and ordered lock acquisition
//! - `ledger` - Public ledger operations (deposit, withdraw, transfer,
//!   balance reads)

pub mod ledger;
pub mod store;

pub use ledger::Ledger;
pub use store::AccountStore;
