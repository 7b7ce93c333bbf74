//! Rental service domain module.
//!
//! The business-rule layer: an Available/Rented state machine over the fleet
//! registry, with every successful rent appended to the rental ledger. Pure
//! domain logic; timestamps come in from the caller.

pub mod service;

pub use service::{RentReceipt, RentalError, RentalService, ReturnReceipt};
