use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};

use rentfleet_fleet::AvailabilityFilter;

use crate::app::{dto, services::AppServices};

const WELCOME: &str = "Welcome to RentFleet Car Rental.";
const AVAILABLE_ONLY: &str = "Displaying available cars only.";

/// `GET /` — the catalog view, optionally narrowed to available cars.
pub async fn catalog(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::CatalogQuery>,
) -> axum::response::Response {
    let (filter, message) = if query.available_only() {
        (AvailabilityFilter::AvailableOnly, AVAILABLE_ONLY)
    } else {
        (AvailabilityFilter::All, WELCOME)
    };

    let (cars, revenue) = services.catalog_view(filter);
    Json(dto::catalog_response(message, &cars, revenue)).into_response()
}
