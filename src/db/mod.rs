//! Repository layer - persistence operations for exhibitions, visitors and tickets.
//!
//! Every function here is a thin pass-through to `SeaORM` and is generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait), so callers can run it on the plain
//! connection or inside a transaction they opened. Validation lives in `core`.

/// Exhibition rows, with cascading deletes of their tickets
pub mod exhibitions;
pub mod statistics;
/// Ticket rows
pub mod tickets;
/// Visitor rows, with cascading deletes of their tickets
pub mod visitors;

use crate::errors::Error;
use sea_orm::DbErr;
use tracing::error;

pub use exhibitions::{
    add_exhibition, delete_exhibition, edit_exhibition, get_all_exhibitions,
    get_exhibition_by_id,
};
pub use statistics::{
    get_average_discount_for_visitors_by_exhibition_id, get_count_sold_tickets_by_exhibition_id,
    get_unique_exhibitions_by_visitor_id,
};
pub use tickets::{
    add_ticket, delete_ticket, edit_ticket, get_all_tickets, get_ticket_by_id,
    get_tickets_by_visitor_id,
};
pub use visitors::{add_visitor, delete_visitor, edit_visitor, get_all_visitors, get_visitor_by_id};

/// Collapses any storage error raised while writing into [`Error::UpdateFailed`].
pub(crate) fn update_failed(err: DbErr) -> Error {
    error!(error = %err, "Failed to update the database");
    Error::UpdateFailed(err)
}
