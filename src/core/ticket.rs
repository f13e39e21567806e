//! Ticket business logic.
//!
//! A ticket can only be written when the exhibition and the visitor it references both
//! exist. Its discounted price is always derived from the stored (rounded) price and the
//! holder's current discount.

use crate::{
    core::{exhibition, input, pricing, visitor},
    db,
    entities::{EntityKind, ticket},
    errors::{Error, Result},
    models::NewTicket,
};
use sea_orm::DatabaseConnection;

/// The caller-supplied fields of a ticket, shared by add and edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicketRequest {
    /// Exhibition the ticket admits to
    pub exhibition_id: i32,
    /// Visitor holding the ticket
    pub visitor_id: i32,
    /// Base price before discount
    pub price: f64,
}

/// Validates a request and resolves it into the columns to store.
///
/// Checks the price first, then that the exhibition and the visitor exist, and computes
/// the discounted price from the visitor's discount.
async fn resolve_request(db: &DatabaseConnection, request: TicketRequest) -> Result<NewTicket> {
    let price = input::validate_price(request.price)?;
    exhibition::get_exhibition(db, request.exhibition_id).await?;
    let holder = visitor::get_visitor(db, request.visitor_id).await?;

    Ok(NewTicket {
        price,
        price_with_discount: pricing::discounted_price(price, holder.discount),
        visitor_id: holder.id,
        exhibition_id: request.exhibition_id,
    })
}

/// Sells a ticket. Fails with `NotFound` and inserts nothing if either reference is missing.
pub async fn add_ticket(db: &DatabaseConnection, request: TicketRequest) -> Result<ticket::Model> {
    let draft = resolve_request(db, request).await?;
    let id = db::add_ticket(db, draft.clone()).await?;
    Ok(ticket::Model {
        id,
        price: draft.price,
        price_with_discount: draft.price_with_discount,
        visitor_id: draft.visitor_id,
        exhibition_id: draft.exhibition_id,
    })
}

/// Finds a ticket by id, failing with `NotFound` when it does not exist.
pub async fn get_ticket(db: &DatabaseConnection, id: i32) -> Result<ticket::Model> {
    db::get_ticket_by_id(db, id).await?.ok_or(Error::NotFound {
        entity: EntityKind::Ticket,
        id,
    })
}

/// Replaces every field of an existing ticket and recomputes its discounted price.
pub async fn edit_ticket(
    db: &DatabaseConnection,
    id: i32,
    request: TicketRequest,
) -> Result<ticket::Model> {
    get_ticket(db, id).await?;
    let draft = resolve_request(db, request).await?;

    db::edit_ticket(
        db,
        ticket::Model {
            id,
            price: draft.price,
            price_with_discount: draft.price_with_discount,
            visitor_id: draft.visitor_id,
            exhibition_id: draft.exhibition_id,
        },
    )
    .await?
    .ok_or(Error::NotFound {
        entity: EntityKind::Ticket,
        id,
    })
}

/// Deletes one ticket. Returns whether it existed.
pub async fn delete_ticket(db: &DatabaseConnection, id: i32) -> Result<bool> {
    db::delete_ticket(db, id).await
}

/// All tickets, in id order.
pub async fn list_tickets(db: &DatabaseConnection) -> Result<Vec<ticket::Model>> {
    db::get_all_tickets(db).await
}
