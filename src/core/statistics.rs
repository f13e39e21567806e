//! Ticket statistics.
//!
//! Thin wrappers over the aggregate queries in `db::statistics`; values are recomputed
//! from the store on every call.

use crate::{core::pricing, db, errors::Result};
use sea_orm::DatabaseConnection;

/// Number of tickets sold for an exhibition.
pub async fn count_sold_tickets(db: &DatabaseConnection, exhibition_id: i32) -> Result<u64> {
    db::get_count_sold_tickets_by_exhibition_id(db, exhibition_id).await
}

/// Number of distinct exhibitions a visitor holds tickets for.
pub async fn count_unique_exhibitions(db: &DatabaseConnection, visitor_id: i32) -> Result<u64> {
    db::get_unique_exhibitions_by_visitor_id(db, visitor_id).await
}

/// Ticket-weighted average discount of an exhibition's visitors, rounded to 2 decimals.
///
/// `None` means no tickets have been sold for the exhibition.
pub async fn average_discount(
    db: &DatabaseConnection,
    exhibition_id: i32,
) -> Result<Option<f64>> {
    let average = db::get_average_discount_for_visitors_by_exhibition_id(db, exhibition_id).await?;
    Ok(average.map(pricing::round_to_cents))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::visitor;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_average_discount_rounds_for_display() -> Result<()> {
        let db = setup_test_db().await?;
        let exhibition = create_test_exhibition(&db, "Thirds").await?;
        let a = create_test_visitor(&db, "A", 10).await?;
        let b = create_test_visitor(&db, "B", 10).await?;
        let c = create_test_visitor(&db, "C", 15).await?;
        for holder in [&a, &b, &c] {
            create_test_ticket(&db, exhibition.id, holder.id, 10.0).await?;
        }

        // 35 / 3 = 11.666...
        assert_eq!(average_discount(&db, exhibition.id).await?, Some(11.67));
        Ok(())
    }

    #[tokio::test]
    async fn test_statistics_reflect_latest_state() -> Result<()> {
        let (db, exhibition, visitor, _ticket) = setup_with_ticket().await?;
        assert_eq!(average_discount(&db, exhibition.id).await?, Some(10.0));
        assert_eq!(count_sold_tickets(&db, exhibition.id).await?, 1);
        assert_eq!(count_unique_exhibitions(&db, visitor.id).await?, 1);

        visitor::edit_visitor(&db, visitor.id, &visitor.name, 30).await?;
        assert_eq!(average_discount(&db, exhibition.id).await?, Some(30.0));

        visitor::delete_visitor(&db, visitor.id).await?;
        assert_eq!(count_sold_tickets(&db, exhibition.id).await?, 0);
        assert_eq!(average_discount(&db, exhibition.id).await?, None);
        Ok(())
    }
}
