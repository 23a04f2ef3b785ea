//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `account`: Account slot and balance types
//! - `error`: Error types for ledger operations

pub mod account;
pub mod error;

pub use account::{Account, AccountIndex, Balance};
pub use error::LedgerError;
