//! Visitor business logic.
//!
//! A visitor's discount feeds the discounted price of every ticket they hold, so
//! editing a visitor reprices those tickets in the same database transaction.

use crate::{
    core::{input, pricing},
    db,
    entities::{EntityKind, ticket, visitor},
    errors::{Error, Result},
    models::NewVisitor,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

/// Outcome of editing a visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorUpdateResult {
    /// The visitor as stored after the edit
    pub visitor: visitor::Model,
    /// Number of tickets whose discounted price was recomputed
    pub repriced_tickets: usize,
}

/// Creates a visitor after validating the name and the discount.
pub async fn add_visitor(
    db: &DatabaseConnection,
    name: &str,
    discount: i32,
) -> Result<visitor::Model> {
    let name = input::validate_name(name)?;
    let discount = input::validate_discount(discount)?;
    let id = db::add_visitor(
        db,
        NewVisitor {
            name: name.clone(),
            discount,
        },
    )
    .await?;
    Ok(visitor::Model { id, name, discount })
}

/// Finds a visitor by id, failing with `NotFound` when it does not exist.
pub async fn get_visitor(db: &DatabaseConnection, id: i32) -> Result<visitor::Model> {
    db::get_visitor_by_id(db, id)
        .await?
        .ok_or(Error::NotFound {
            entity: EntityKind::Visitor,
            id,
        })
}

/// Replaces a visitor's name and discount and reprices all of their tickets.
///
/// The visitor update and every ticket update commit together; if any of them fails,
/// nothing is changed.
pub async fn edit_visitor(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    discount: i32,
) -> Result<VisitorUpdateResult> {
    let name = input::validate_name(name)?;
    let discount = input::validate_discount(discount)?;

    let txn = db.begin().await.map_err(db::update_failed)?;

    let visitor = db::edit_visitor(&txn, visitor::Model { id, name, discount })
        .await?
        .ok_or(Error::NotFound {
            entity: EntityKind::Visitor,
            id,
        })?;

    let tickets = db::get_tickets_by_visitor_id(&txn, id).await?;
    let repriced_tickets = tickets.len();
    for held in tickets {
        let price_with_discount = pricing::discounted_price(held.price, visitor.discount);
        db::edit_ticket(
            &txn,
            ticket::Model {
                price_with_discount,
                ..held
            },
        )
        .await?;
    }

    txn.commit().await.map_err(db::update_failed)?;

    info!(
        "Visitor {} now has {}% discount; repriced {} tickets",
        visitor.id, visitor.discount, repriced_tickets
    );
    Ok(VisitorUpdateResult {
        visitor,
        repriced_tickets,
    })
}

/// Deletes a visitor and their tickets. Returns whether the visitor existed.
pub async fn delete_visitor(db: &DatabaseConnection, id: i32) -> Result<bool> {
    db::delete_visitor(db, id).await
}

/// All visitors, in id order.
pub async fn list_visitors(db: &DatabaseConnection) -> Result<Vec<visitor::Model>> {
    db::get_all_visitors(db).await
}
