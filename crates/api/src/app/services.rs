use std::sync::RwLock;

use chrono::{DateTime, Utc};

use rentfleet_core::{CarId, DomainResult};
use rentfleet_fleet::{AvailabilityFilter, Car, FleetRegistry};
use rentfleet_rental::{RentReceipt, RentalError, RentalService, ReturnReceipt};

use crate::app::catalog::{self, CatalogConfig};

/// Shared application state.
///
/// The rental service is process-wide mutable state and axum serves requests
/// concurrently, so every access goes through one `RwLock` (reads for the
/// catalog view, a write lock around each rent/return). The at-most-one-open-
/// rental invariant depends on this guard. Lock scopes stay inside each
/// method; nothing holds a guard across an await point.
#[derive(Debug)]
pub struct AppServices {
    rental: RwLock<RentalService>,
}

impl AppServices {
    /// State over an explicit registry (tests hand-build small fleets).
    pub fn new(fleet: FleetRegistry) -> Self {
        Self {
            rental: RwLock::new(RentalService::new(fleet)),
        }
    }

    /// State over a freshly seeded catalog.
    pub fn seeded(config: &CatalogConfig) -> DomainResult<Self> {
        Ok(Self::new(catalog::seed_fleet(config)?))
    }

    /// Snapshot of the catalog (cloned cars) plus current revenue.
    pub fn catalog_view(&self, filter: AvailabilityFilter) -> (Vec<Car>, u64) {
        let rental = self.rental.read().unwrap();
        let cars = rental.list_cars(filter).cloned().collect();
        (cars, rental.total_revenue())
    }

    pub fn rent(
        &self,
        car_id: CarId,
        days: u32,
        occurred_at: DateTime<Utc>,
    ) -> Result<RentReceipt, RentalError> {
        self.rental.write().unwrap().rent(car_id, days, occurred_at)
    }

    pub fn return_car(&self, car_id: CarId) -> Result<ReturnReceipt, RentalError> {
        self.rental.write().unwrap().return_car(car_id)
    }
}
