use chrono::{DateTime, Utc};
use thiserror::Error;

use rentfleet_core::CarId;
use rentfleet_fleet::{AvailabilityFilter, Car, FleetRegistry};
use rentfleet_ledger::{RentalLedger, RentalRecord};

/// Rental-level failure.
///
/// Every variant is recoverable by the caller; no operation panics on any
/// input, and a failed operation leaves fleet and ledger untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RentalError {
    #[error("car {0} not found")]
    CarNotFound(CarId),

    #[error("car {0} is currently rented")]
    AlreadyRented(CarId),

    #[error("car {0} is already available")]
    AlreadyAvailable(CarId),

    #[error("rental duration must be at least one day")]
    InvalidDays,
}

/// Successful rent outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentReceipt {
    pub car_id: CarId,
    pub brand: String,
    pub model_year: u16,
    pub days: u32,
    pub cost: u64,
}

/// Successful return outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub car_id: CarId,
    pub brand: String,
}

/// The rental business-rule layer.
///
/// Owns the fleet registry and the ledger; constructed once at startup and
/// handed to whatever serves requests. Cars cycle between `Available` and
/// `Rented` indefinitely — the availability flag on [`Car`] is the entire
/// per-car state machine, which also enforces at most one open rental per
/// car at a time.
#[derive(Debug)]
pub struct RentalService {
    fleet: FleetRegistry,
    ledger: RentalLedger,
}

impl RentalService {
    pub fn new(fleet: FleetRegistry) -> Self {
        Self {
            fleet,
            ledger: RentalLedger::new(),
        }
    }

    /// Rent a car for `days` days at its daily price.
    ///
    /// On success the car transitions `Available -> Rented` and the ledger
    /// gains exactly one record with `cost = daily_price * days`.
    pub fn rent(
        &mut self,
        car_id: CarId,
        days: u32,
        occurred_at: DateTime<Utc>,
    ) -> Result<RentReceipt, RentalError> {
        if days == 0 {
            return Err(RentalError::InvalidDays);
        }

        let car = self
            .fleet
            .find_by_id(car_id)
            .ok_or(RentalError::CarNotFound(car_id))?;
        if !car.is_available() {
            return Err(RentalError::AlreadyRented(car_id));
        }

        let cost = car.daily_price() * u64::from(days);
        let receipt = RentReceipt {
            car_id,
            brand: car.brand().to_string(),
            model_year: car.model_year(),
            days,
            cost,
        };

        self.fleet
            .set_availability(car_id, false)
            .map_err(|_| RentalError::CarNotFound(car_id))?;
        self.ledger.record(RentalRecord {
            car_id,
            days,
            cost,
            recorded_at: occurred_at,
        });

        Ok(receipt)
    }

    /// Return a rented car.
    ///
    /// Transitions `Rented -> Available`. No ledger entry: the cost was
    /// captured when the rental was taken out.
    pub fn return_car(&mut self, car_id: CarId) -> Result<ReturnReceipt, RentalError> {
        let car = self
            .fleet
            .find_by_id(car_id)
            .ok_or(RentalError::CarNotFound(car_id))?;
        if car.is_available() {
            return Err(RentalError::AlreadyAvailable(car_id));
        }

        let receipt = ReturnReceipt {
            car_id,
            brand: car.brand().to_string(),
        };
        self.fleet
            .set_availability(car_id, true)
            .map_err(|_| RentalError::CarNotFound(car_id))?;

        Ok(receipt)
    }

    /// Cars matching `filter`, in catalog order. Read-only.
    pub fn list_cars(&self, filter: AvailabilityFilter) -> impl Iterator<Item = &Car> {
        self.fleet.list(filter)
    }

    /// Revenue accumulated across all recorded rentals.
    pub fn total_revenue(&self) -> u64 {
        self.ledger.total_revenue()
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    pub fn ledger(&self) -> &RentalLedger {
        &self.ledger
    }
}
