//! Fleet registry domain module.
//!
//! This crate contains the car catalog: the `Car` entity and the
//! insertion-ordered, id-indexed `FleetRegistry`. Pure domain logic, no IO,
//! no HTTP, no storage.

pub mod car;
pub mod registry;

pub use car::Car;
pub use registry::{AvailabilityFilter, FleetRegistry};
