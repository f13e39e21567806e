//! Parsing and validation of raw field input.
//!
//! The `parse_*` functions turn a console line into a typed value. The `validate_*`
//! functions check values that are already typed; the facade runs them on every write
//! so an invalid entity never reaches the store, whichever front-end produced it.

use crate::{
    core::pricing,
    entities::EntityKind,
    errors::{Error, Result},
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Format accepted for exhibition dates (`YYYY.MM.DD`).
pub const DATE_FORMAT: &str = "%Y.%m.%d";

/// Highest discount a visitor can have, in percent.
pub const MAX_DISCOUNT: i32 = 100;

/// Parses an entity id, failing with `InvalidId` for anything but an integer.
pub fn parse_id(entity: EntityKind, input: &str) -> Result<i32> {
    input.trim().parse().map_err(|_| Error::InvalidId {
        entity,
        input: input.to_string(),
    })
}

/// Trims a name and rejects it when nothing is left.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parses a `YYYY.MM.DD` date into midnight UTC of that day.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map(date_to_utc)
        .map_err(|_| Error::InvalidDate {
            input: input.to_string(),
        })
}

/// Normalizes a calendar date to midnight UTC.
#[must_use]
pub fn date_to_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Formats a stored date back into `YYYY.MM.DD`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses and validates a price typed at the console.
pub fn parse_price(input: &str) -> Result<f64> {
    let price: f64 = input.trim().parse().map_err(|_| Error::InvalidPrice {
        input: input.to_string(),
    })?;
    validate_price(price)
}

/// Accepts finite, non-negative prices and returns them rounded to cents.
///
/// Prices so large that rounding overflows are rejected as well.
pub fn validate_price(price: f64) -> Result<f64> {
    let rounded = pricing::round_to_cents(price);
    if !rounded.is_finite() || price < 0.0 {
        return Err(Error::InvalidPrice {
            input: price.to_string(),
        });
    }
    Ok(rounded)
}

/// Parses and validates a whole-percent discount.
pub fn parse_discount(input: &str) -> Result<i32> {
    let discount: i32 = input.trim().parse().map_err(|_| Error::InvalidDiscount {
        input: input.to_string(),
    })?;
    validate_discount(discount)
}

/// Accepts discounts within `0..=100` percent.
pub fn validate_discount(discount: i32) -> Result<i32> {
    if (0..=MAX_DISCOUNT).contains(&discount) {
        Ok(discount)
    } else {
        Err(Error::InvalidDiscount {
            input: discount.to_string(),
        })
    }
}
