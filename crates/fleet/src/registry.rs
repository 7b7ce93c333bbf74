use std::collections::HashMap;

use rentfleet_core::{CarId, DomainError, DomainResult, Entity};

use crate::car::Car;

/// Which cars a listing should include.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AvailabilityFilter {
    All,
    AvailableOnly,
}

/// The fleet registry: every car in the catalog, in insertion order, with an
/// id index for O(1) lookup.
///
/// Cars are never removed; the availability flag is the only thing that
/// changes after insertion.
#[derive(Debug, Default, Clone)]
pub struct FleetRegistry {
    cars: Vec<Car>,
    index: HashMap<CarId, usize>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a car to the catalog.
    ///
    /// Identifiers uniquely determine a car for the lifetime of the registry;
    /// a duplicate id is a conflict and leaves the registry unchanged.
    pub fn insert(&mut self, car: Car) -> DomainResult<()> {
        let id = *car.id();
        if self.index.contains_key(&id) {
            return Err(DomainError::conflict(format!("car {id} already registered")));
        }

        self.index.insert(id, self.cars.len());
        self.cars.push(car);
        Ok(())
    }

    pub fn find_by_id(&self, id: CarId) -> Option<&Car> {
        self.index.get(&id).map(|&slot| &self.cars[slot])
    }

    /// All cars matching `filter`, in catalog order.
    pub fn list(&self, filter: AvailabilityFilter) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(move |car| match filter {
            AvailabilityFilter::All => true,
            AvailabilityFilter::AvailableOnly => car.is_available(),
        })
    }

    /// Flip the availability flag on the referenced car.
    pub fn set_availability(&mut self, id: CarId, available: bool) -> DomainResult<()> {
        let slot = *self.index.get(&id).ok_or_else(DomainError::not_found)?;
        self.cars[slot].set_available(available);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
