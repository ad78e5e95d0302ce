use thiserror::Error;

use shared_models::error::AppError;
use shared_models::time::TimeParseError;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TimeParseError> for BookingError {
    fn from(err: TimeParseError) -> Self {
        match err {
            TimeParseError::Invalid(value) => BookingError::InvalidTime(value),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidTime(_) => AppError::BadRequest(err.to_string()),
            BookingError::DatabaseError(msg) => AppError::Database(msg),
        }
    }
}
