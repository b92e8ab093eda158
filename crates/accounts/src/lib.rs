//! Accounts domain module.
//!
//! A single bank account aggregate with holder, balance and an active flag.
//! Everything here is deterministic domain logic: no IO, no storage, no
//! shared state. Diagnostics are emitted as `tracing` events only.

pub mod account;

pub use account::{Account, AccountId, AccountStatus};
