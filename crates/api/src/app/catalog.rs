//! Startup catalog seeding.
//!
//! Produces the fleet the registry starts with: `units_per_brand` cars per
//! brand, identifiers starting at `base_id` and incrementing by one, model
//! year / daily price / color drawn from each brand's ranges.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use rentfleet_core::{CarId, DomainResult};
use rentfleet_fleet::{Car, FleetRegistry};

/// Per-brand generation ranges (inclusive).
struct BrandSpec {
    name: &'static str,
    years: (u16, u16),
    daily_prices: (u64, u64),
}

const BRANDS: [BrandSpec; 4] = [
    BrandSpec { name: "Mercedes", years: (2022, 2025), daily_prices: (250, 350) },
    BrandSpec { name: "BMW", years: (2021, 2024), daily_prices: (200, 300) },
    BrandSpec { name: "Audi", years: (2020, 2023), daily_prices: (180, 280) },
    BrandSpec { name: "Porsche", years: (2023, 2025), daily_prices: (350, 500) },
];

const COLORS: [&str; 6] = ["Red", "Blue", "Black", "White", "Grey", "Silver"];

/// Catalog generation parameters.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// First identifier; subsequent cars increment by one.
    pub base_id: u32,
    pub units_per_brand: u32,
    /// Fixed RNG seed for reproducible catalogs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_id: 1001,
            units_per_brand: 15,
            seed: None,
        }
    }
}

/// Generate the starting fleet. Every car begins available.
pub fn seed_fleet(config: &CatalogConfig) -> DomainResult<FleetRegistry> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut registry = FleetRegistry::new();
    let mut next_id = config.base_id;

    for brand in &BRANDS {
        for _ in 0..config.units_per_brand {
            let model_year = rng.gen_range(brand.years.0..=brand.years.1);
            let daily_price = rng.gen_range(brand.daily_prices.0..=brand.daily_prices.1);
            let color = COLORS.choose(&mut rng).copied().unwrap_or("Black");

            registry.insert(Car::new(
                CarId::new(next_id),
                brand.name,
                model_year,
                daily_price,
                color,
            ))?;
            next_id += 1;
        }
    }

    tracing::info!(cars = registry.len(), "seeded rental catalog");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentfleet_fleet::AvailabilityFilter;

    fn seeded(seed: u64) -> FleetRegistry {
        seed_fleet(&CatalogConfig {
            seed: Some(seed),
            ..CatalogConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn default_catalog_has_sixty_available_cars_with_contiguous_ids() {
        let registry = seeded(7);

        assert_eq!(registry.len(), 60);
        let ids: Vec<u32> = registry
            .list(AvailabilityFilter::All)
            .map(|c| c.id_typed().as_u32())
            .collect();
        assert_eq!(ids, (1001..=1060).collect::<Vec<u32>>());
        assert_eq!(registry.list(AvailabilityFilter::AvailableOnly).count(), 60);
    }

    #[test]
    fn prices_and_years_stay_inside_the_brand_ranges() {
        let registry = seeded(7);

        for car in registry.list(AvailabilityFilter::All) {
            let brand = BRANDS
                .iter()
                .find(|b| b.name == car.brand())
                .expect("seeded car has a known brand");
            assert!((brand.years.0..=brand.years.1).contains(&car.model_year()));
            assert!((brand.daily_prices.0..=brand.daily_prices.1).contains(&car.daily_price()));
            assert!(COLORS.contains(&car.color()));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_catalog() {
        let a = seeded(42);
        let b = seeded(42);

        let pairs = a.list(AvailabilityFilter::All).zip(b.list(AvailabilityFilter::All));
        for (left, right) in pairs {
            assert_eq!(left, right);
        }
    }
}
