use rentfleet_core::{CarId, Entity};

/// A single rentable car.
///
/// Everything except the availability flag is fixed at catalog creation.
/// Flag changes go through [`crate::FleetRegistry::set_availability`] so the
/// registry stays the single owner of fleet state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    brand: String,
    model_year: u16,
    daily_price: u64,
    color: String,
    available: bool,
}

impl Car {
    /// Create a car. New cars always start out available.
    pub fn new(
        id: CarId,
        brand: impl Into<String>,
        model_year: u16,
        daily_price: u64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            brand: brand.into(),
            model_year,
            daily_price,
            color: color.into(),
            available: true,
        }
    }

    pub fn id_typed(&self) -> CarId {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model_year(&self) -> u16 {
        self.model_year
    }

    /// Daily price in whole currency units.
    pub fn daily_price(&self) -> u64 {
        self.daily_price
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Entity for Car {
    type Id = CarId;

    fn id(&self) -> &CarId {
        &self.id
    }
}
