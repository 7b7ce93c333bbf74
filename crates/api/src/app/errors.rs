//! Failure-to-message mapping.
//!
//! Every outcome — success or failure — renders as HTTP 200 with the full
//! catalog view; only the message differs. Parse failures never reach the
//! rental service and collapse to the generic input messages below.

use rentfleet_rental::RentalError;

/// Generic message for malformed `POST /rent` input.
pub const INVALID_RENT_INPUT: &str = "Error occurred: Please check the input and Car ID.";

/// Generic message for malformed `POST /return` input.
pub const INVALID_RETURN_INPUT: &str = "Error occurred: Please check the Car ID.";

/// User-visible message for a rental-service failure.
pub fn rental_error_message(err: &RentalError) -> &'static str {
    match err {
        RentalError::CarNotFound(_) => "Error: Car not found.",
        RentalError::AlreadyRented(_) => "Error: Car is currently rented.",
        RentalError::AlreadyAvailable(_) => "Error: Car is already available.",
        // To the form user, a zero-day rental is the same input problem as a
        // non-numeric field.
        RentalError::InvalidDays => INVALID_RENT_INPUT,
    }
}
