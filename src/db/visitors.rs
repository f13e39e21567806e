use crate::db::update_failed;
use crate::entities::{Ticket, Visitor, ticket, visitor};
use crate::errors::Result;
use crate::models::NewVisitor;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info, instrument};

/// Inserts a new visitor and returns its generated id.
#[instrument(skip(db))]
pub async fn add_visitor<C: ConnectionTrait>(db: &C, draft: NewVisitor) -> Result<i32> {
    let inserted = visitor::ActiveModel {
        name: Set(draft.name),
        discount: Set(draft.discount),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(update_failed)?;

    info!(
        "Added visitor_id {}: '{}' with {}% discount",
        inserted.id, inserted.name, inserted.discount
    );
    Ok(inserted.id)
}

/// Deletes a visitor together with every ticket they hold.
///
/// Returns `false` when no visitor had this id.
#[instrument(skip(db))]
pub async fn delete_visitor<C>(db: &C, visitor_id: i32) -> Result<bool>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await.map_err(update_failed)?;

    let tickets = Ticket::delete_many()
        .filter(ticket::Column::VisitorId.eq(visitor_id))
        .exec(&txn)
        .await
        .map_err(update_failed)?;
    let deleted = Visitor::delete_by_id(visitor_id)
        .exec(&txn)
        .await
        .map_err(update_failed)?;

    txn.commit().await.map_err(update_failed)?;

    if deleted.rows_affected == 0 {
        debug!("No visitor with id {} to delete.", visitor_id);
        return Ok(false);
    }
    info!(
        "Deleted visitor_id {} and {} of their tickets",
        visitor_id, tickets.rows_affected
    );
    Ok(true)
}

/// Overwrites the name and discount of the stored visitor with the same id.
///
/// Tickets are not touched here; repricing them is the caller's job.
#[instrument(skip(db))]
pub async fn edit_visitor<C: ConnectionTrait>(
    db: &C,
    edited: visitor::Model,
) -> Result<Option<visitor::Model>> {
    let Some(existing) = Visitor::find_by_id(edited.id)
        .one(db)
        .await
        .map_err(update_failed)?
    else {
        return Ok(None);
    };

    let mut active: visitor::ActiveModel = existing.into();
    active.name = Set(edited.name);
    active.discount = Set(edited.discount);
    let updated = active.update(db).await.map_err(update_failed)?;

    info!(
        "Updated visitor_id {}: discount = {}%",
        updated.id, updated.discount
    );
    Ok(Some(updated))
}

/// Looks up a visitor; `None` when the id does not exist.
pub async fn get_visitor_by_id<C: ConnectionTrait>(
    db: &C,
    visitor_id: i32,
) -> Result<Option<visitor::Model>> {
    Visitor::find_by_id(visitor_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// All visitors, in id order.
pub async fn get_all_visitors<C: ConnectionTrait>(db: &C) -> Result<Vec<visitor::Model>> {
    Visitor::find()
        .order_by_asc(visitor::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
