//! Request DTOs and JSON/message mapping helpers.

use serde::Deserialize;

use rentfleet_fleet::Car;
use rentfleet_rental::{RentReceipt, ReturnReceipt};

// -------------------------
// Request DTOs
// -------------------------

/// `POST /rent` form body.
///
/// Fields arrive as raw strings (`Option` so a missing field is handled as
/// invalid input rather than rejected by the extractor) and are parsed at the
/// boundary; the rental service never sees malformed input.
#[derive(Debug, Deserialize)]
pub struct RentForm {
    pub car_id: Option<String>,
    pub days: Option<String>,
}

/// `POST /return` form body.
#[derive(Debug, Deserialize)]
pub struct ReturnForm {
    pub car_id: Option<String>,
}

/// `GET /` query string. `available=true` narrows the listing.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub available: Option<String>,
}

impl CatalogQuery {
    pub fn available_only(&self) -> bool {
        self.available.as_deref() == Some("true")
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn car_to_json(car: &Car) -> serde_json::Value {
    serde_json::json!({
        "id": car.id_typed(),
        "brand": car.brand(),
        "model_year": car.model_year(),
        "daily_price": car.daily_price(),
        "color": car.color(),
        "available": car.is_available(),
    })
}

/// The catalog view every endpoint re-renders: result message, car list, and
/// the revenue accumulated so far.
pub fn catalog_response(
    message: impl Into<String>,
    cars: &[Car],
    total_revenue: u64,
) -> serde_json::Value {
    serde_json::json!({
        "message": message.into(),
        "cars": cars.iter().map(car_to_json).collect::<Vec<_>>(),
        "total_revenue": total_revenue,
    })
}

pub fn rent_success_message(receipt: &RentReceipt) -> String {
    format!(
        "Car {} ({} {}) rented successfully for {} days. Total Cost: ${}",
        receipt.car_id, receipt.brand, receipt.model_year, receipt.days, receipt.cost
    )
}

pub fn return_success_message(receipt: &ReturnReceipt) -> String {
    format!("Car {} ({}) returned successfully.", receipt.car_id, receipt.brand)
}
