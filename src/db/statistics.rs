//! Aggregate queries over tickets.
//!
//! All three are computed from the current rows on every call; nothing is cached.

use crate::entities::{Ticket, Visitor, ticket, visitor};
use crate::errors::Result;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use tracing::{debug, instrument};

/// Number of tickets sold for an exhibition.
#[instrument(skip(db))]
pub async fn get_count_sold_tickets_by_exhibition_id<C: ConnectionTrait>(
    db: &C,
    exhibition_id: i32,
) -> Result<u64> {
    let count = Ticket::find()
        .filter(ticket::Column::ExhibitionId.eq(exhibition_id))
        .count(db)
        .await?;
    debug!("Exhibition {} has {} sold tickets", exhibition_id, count);
    Ok(count)
}

/// Number of distinct exhibitions a visitor holds tickets for.
#[instrument(skip(db))]
pub async fn get_unique_exhibitions_by_visitor_id<C: ConnectionTrait>(
    db: &C,
    visitor_id: i32,
) -> Result<u64> {
    let count = Ticket::find()
        .select_only()
        .column(ticket::Column::ExhibitionId)
        .distinct()
        .filter(ticket::Column::VisitorId.eq(visitor_id))
        .count(db)
        .await?;
    debug!("Visitor {} attends {} unique exhibitions", visitor_id, count);
    Ok(count)
}

/// Mean visitor discount over the tickets of an exhibition.
///
/// Every ticket contributes one term, so a visitor holding three tickets counts three
/// times. Returns `None` when the exhibition has no tickets.
#[instrument(skip(db))]
pub async fn get_average_discount_for_visitors_by_exhibition_id<C: ConnectionTrait>(
    db: &C,
    exhibition_id: i32,
) -> Result<Option<f64>> {
    let discounts: Vec<i32> = Ticket::find()
        .select_only()
        .column(visitor::Column::Discount)
        .inner_join(Visitor)
        .filter(ticket::Column::ExhibitionId.eq(exhibition_id))
        .into_tuple()
        .all(db)
        .await?;

    if discounts.is_empty() {
        debug!("Exhibition {} has no tickets to average", exhibition_id);
        return Ok(None);
    }

    let total: i64 = discounts.iter().map(|&d| i64::from(d)).sum();
    // Cast safety: discounts are within 0..=100 and ticket counts are far below 2^52
    #[allow(clippy::cast_precision_loss)]
    let average = total as f64 / discounts.len() as f64;
    Ok(Some(average))
}
