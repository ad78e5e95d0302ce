use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::time::TimeParseError;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidDay(i32),

    #[error("Schedule window is empty: close time must be after open time")]
    EmptyWindow,

    #[error("A schedule save is already in progress for doctor {0}")]
    SaveInProgress(Uuid),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TimeParseError> for ScheduleError {
    fn from(err: TimeParseError) -> Self {
        match err {
            TimeParseError::Invalid(value) => ScheduleError::InvalidTime(value),
        }
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::SaveInProgress(_) => AppError::Conflict(err.to_string()),
            ScheduleError::DatabaseError(msg) => AppError::Database(msg),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
