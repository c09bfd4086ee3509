use axum::http::StatusCode;
use thiserror::Error;

/// Everything a booking-related operation can reject with. Messages are the
/// client-facing wording; the status mapping lives next to them so the HTTP
/// layer never has to interpret variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Invalid service")]
    InvalidService,
    #[error("Time slot unavailable")]
    SlotTaken,
    #[error("Invalid date format")]
    InvalidDate,
    #[error("Cannot book past dates")]
    PastDate,
    #[error("Time must be a half-hour slot between 09:00 and 16:30")]
    InvalidTime,
    #[error("Appointment not found")]
    NotFound,
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::SlotTaken => StatusCode::CONFLICT,
            BookingError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
