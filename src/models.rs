//! Insert drafts for the three entities.
//!
//! A draft carries every column except the store-generated `id`. The facade builds
//! drafts only from validated input, and the repository turns them into rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields of an exhibition that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExhibition {
    /// Display name, already trimmed
    pub name: String,
    /// Day of the exhibition at midnight UTC
    pub date: DateTime<Utc>,
}

/// Fields of a visitor that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVisitor {
    /// Display name, already trimmed
    pub name: String,
    /// Discount in percent, within `0..=100`
    pub discount: i32,
}

/// Fields of a ticket that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    /// Base price, rounded to cents
    pub price: f64,
    /// Price after the holder's discount
    pub price_with_discount: f64,
    /// Holder of the ticket
    pub visitor_id: i32,
    /// Exhibition the ticket admits to
    pub exhibition_id: i32,
}
