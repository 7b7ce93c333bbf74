//! Rental ledger domain module.
//!
//! Append-only log of completed rental transactions and the revenue total
//! derived from it. Pure domain logic only: no IO, no HTTP, no persistence.

pub mod ledger;

pub use ledger::{RentalLedger, RentalRecord};
