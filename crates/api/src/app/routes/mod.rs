use axum::{
    routing::{get, post},
    Router,
};

pub mod cars;
pub mod rentals;
pub mod system;

/// Router for all catalog-facing endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(cars::catalog))
        .route("/rent", post(rentals::rent))
        .route("/return", post(rentals::return_car))
}
