use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Form, Json};
use chrono::Utc;

use rentfleet_core::{CarId, DomainError, DomainResult};
use rentfleet_fleet::AvailabilityFilter;

use crate::app::{dto, errors, services::AppServices};

/// `POST /rent` — rent a car for a number of days.
pub async fn rent(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::RentForm>,
) -> axum::response::Response {
    let message = match parse_rent_form(&form) {
        Ok((car_id, days)) => match services.rent(car_id, days, Utc::now()) {
            Ok(receipt) => {
                tracing::info!(car_id = %receipt.car_id, days, cost = receipt.cost, "car rented");
                dto::rent_success_message(&receipt)
            }
            Err(err) => errors::rental_error_message(&err).to_string(),
        },
        Err(err) => {
            tracing::debug!(%err, "rejected rent form");
            errors::INVALID_RENT_INPUT.to_string()
        }
    };

    render_catalog(&services, message)
}

/// `POST /return` — return a rented car.
pub async fn return_car(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::ReturnForm>,
) -> axum::response::Response {
    let message = match parse_return_form(&form) {
        Ok(car_id) => match services.return_car(car_id) {
            Ok(receipt) => {
                tracing::info!(car_id = %receipt.car_id, "car returned");
                dto::return_success_message(&receipt)
            }
            Err(err) => errors::rental_error_message(&err).to_string(),
        },
        Err(err) => {
            tracing::debug!(%err, "rejected return form");
            errors::INVALID_RETURN_INPUT.to_string()
        }
    };

    render_catalog(&services, message)
}

/// Parse-then-validate both form fields. Any failure collapses to the one
/// generic input message at the call site.
fn parse_rent_form(form: &dto::RentForm) -> DomainResult<(CarId, u32)> {
    let car_id = form
        .car_id
        .as_deref()
        .ok_or_else(|| DomainError::validation("missing car_id"))?
        .parse::<CarId>()?;
    let days = form
        .days
        .as_deref()
        .ok_or_else(|| DomainError::validation("missing days"))?
        .trim()
        .parse::<u32>()
        .map_err(|e| DomainError::validation(format!("days: {e}")))?;
    Ok((car_id, days))
}

fn parse_return_form(form: &dto::ReturnForm) -> DomainResult<CarId> {
    form.car_id
        .as_deref()
        .ok_or_else(|| DomainError::validation("missing car_id"))?
        .parse::<CarId>()
}

/// Rent/return always re-render the full, unfiltered catalog.
fn render_catalog(services: &AppServices, message: String) -> axum::response::Response {
    let (cars, revenue) = services.catalog_view(AvailabilityFilter::All);
    Json(dto::catalog_response(message, &cars, revenue)).into_response()
}
