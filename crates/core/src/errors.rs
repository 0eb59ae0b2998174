//! Core error types for the foliosim engine.
//!
//! Parse-layer failures are wrapped in [`ValidationError`]; the only fatal
//! construction error is a missing mandatory operation. Query-time "no data"
//! conditions are sentinel return values, never errors.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the simulation engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatorily-required operation is absent from the input sequence.
    /// Fatal to ledger construction; no partial ledger is produced.
    #[error("Required operation missing: {0}")]
    MissingOperation(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for command-line input and token parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unrecognized command: {0}")]
    UnknownCommand(String),

    #[error("Unknown month token: {0}")]
    UnknownMonth(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}
