use crate::db::update_failed;
use crate::entities::{Ticket, ticket};
use crate::errors::Result;
use crate::models::NewTicket;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info, instrument};

/// Inserts a new ticket and returns its generated id.
///
/// The referenced exhibition and visitor must exist; the foreign keys reject the row
/// otherwise and the failure surfaces as `UpdateFailed`.
#[instrument(skip(db))]
pub async fn add_ticket<C: ConnectionTrait>(db: &C, draft: NewTicket) -> Result<i32> {
    let inserted = ticket::ActiveModel {
        price: Set(draft.price),
        price_with_discount: Set(draft.price_with_discount),
        visitor_id: Set(draft.visitor_id),
        exhibition_id: Set(draft.exhibition_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(update_failed)?;

    info!(
        "Added ticket_id {} for exhibition_id {} / visitor_id {}: price = {}, with discount = {}",
        inserted.id,
        inserted.exhibition_id,
        inserted.visitor_id,
        inserted.price,
        inserted.price_with_discount
    );
    Ok(inserted.id)
}

#[instrument(skip(db))]
pub async fn delete_ticket<C: ConnectionTrait>(db: &C, ticket_id: i32) -> Result<bool> {
    let deleted = Ticket::delete_by_id(ticket_id)
        .exec(db)
        .await
        .map_err(update_failed)?;

    let found = deleted.rows_affected > 0;
    if found {
        info!("Deleted ticket_id {}", ticket_id);
    } else {
        debug!("No ticket with id {} to delete.", ticket_id);
    }
    Ok(found)
}

/// Overwrites every column except the id of the stored ticket with the same id.
#[instrument(skip(db))]
pub async fn edit_ticket<C: ConnectionTrait>(
    db: &C,
    edited: ticket::Model,
) -> Result<Option<ticket::Model>> {
    let Some(existing) = Ticket::find_by_id(edited.id)
        .one(db)
        .await
        .map_err(update_failed)?
    else {
        return Ok(None);
    };

    let mut active: ticket::ActiveModel = existing.into();
    active.price = Set(edited.price);
    active.price_with_discount = Set(edited.price_with_discount);
    active.visitor_id = Set(edited.visitor_id);
    active.exhibition_id = Set(edited.exhibition_id);
    let updated = active.update(db).await.map_err(update_failed)?;

    info!("Updated ticket_id {}", updated.id);
    Ok(Some(updated))
}

/// Looks up a ticket; `None` when the id does not exist.
pub async fn get_ticket_by_id<C: ConnectionTrait>(
    db: &C,
    ticket_id: i32,
) -> Result<Option<ticket::Model>> {
    Ticket::find_by_id(ticket_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// All tickets, in id order.
pub async fn get_all_tickets<C: ConnectionTrait>(db: &C) -> Result<Vec<ticket::Model>> {
    Ticket::find()
        .order_by_asc(ticket::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Every ticket held by one visitor, in id order.
pub async fn get_tickets_by_visitor_id<C: ConnectionTrait>(
    db: &C,
    visitor_id: i32,
) -> Result<Vec<ticket::Model>> {
    Ticket::find()
        .filter(ticket::Column::VisitorId.eq(visitor_id))
        .order_by_asc(ticket::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
