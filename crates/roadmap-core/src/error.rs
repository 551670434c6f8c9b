use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Please fill in all fields.")]
    MissingField(&'static str),

    #[error("Duration must be a valid number of days.")]
    InvalidDuration(String),

    #[error("unknown level {0:?}: expected Beginner, Intermediate or Advanced")]
    InvalidLevel(String),
}
