//! Unified error type for the ticket center.
//!
//! Validation failures, missing entities and storage failures all end up here so
//! the console loop can render any of them and keep accepting commands.

use crate::entities::EntityKind;
use sea_orm::DbErr;
use thiserror::Error;

/// Every failure a ticket center operation can report.
#[derive(Debug, Error)]
pub enum Error {
    /// An identifier could not be parsed as an integer.
    #[error("ERROR: Incorrect {} ID", .entity.noun())]
    InvalidId {
        /// Which kind of entity the id was meant for
        entity: EntityKind,
        /// The raw input as entered
        input: String,
    },

    /// A name was empty after trimming.
    #[error("ERROR: Name can't be empty")]
    EmptyName,

    /// A date did not match the `YYYY.MM.DD` format.
    #[error("ERROR: Incorrect date input: {input:?}")]
    InvalidDate {
        /// The raw input as entered
        input: String,
    },

    /// A price was not a finite, non-negative number.
    #[error("ERROR: Incorrect price input: {input:?}")]
    InvalidPrice {
        /// The raw input as entered
        input: String,
    },

    /// A discount was not an integer in `0..=100`.
    #[error("ERROR: Incorrect discount input: {input:?}")]
    InvalidDiscount {
        /// The raw input as entered
        input: String,
    },

    /// The referenced entity does not exist.
    #[error("ERROR: {entity} not found!")]
    NotFound {
        /// Which kind of entity was looked up
        entity: EntityKind,
        /// The id that was looked up
        id: i32,
    },

    /// A write against the store failed; prior state is unchanged.
    #[error("ERROR: Failed to update the database")]
    UpdateFailed(#[source] DbErr),

    /// A read against the store failed.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Settings could not be loaded or are invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors caused by malformed user input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidId { .. }
                | Self::EmptyName
                | Self::InvalidDate { .. }
                | Self::InvalidPrice { .. }
                | Self::InvalidDiscount { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
