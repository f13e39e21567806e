use crate::db::update_failed;
use crate::entities::{Exhibition, Ticket, exhibition, ticket};
use crate::errors::Result;
use crate::models::NewExhibition;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info, instrument};

/// Inserts a new exhibition and returns its generated id.
#[instrument(skip(db))]
pub async fn add_exhibition<C: ConnectionTrait>(db: &C, draft: NewExhibition) -> Result<i32> {
    let inserted = exhibition::ActiveModel {
        name: Set(draft.name),
        date: Set(draft.date),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(update_failed)?;

    info!("Added exhibition_id {}: '{}'", inserted.id, inserted.name);
    Ok(inserted.id)
}

/// Deletes an exhibition together with every ticket sold for it.
///
/// Both deletes run in one transaction. Returns `false` when no exhibition had this id.
#[instrument(skip(db))]
pub async fn delete_exhibition<C>(db: &C, exhibition_id: i32) -> Result<bool>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await.map_err(update_failed)?;

    let tickets = Ticket::delete_many()
        .filter(ticket::Column::ExhibitionId.eq(exhibition_id))
        .exec(&txn)
        .await
        .map_err(update_failed)?;
    let deleted = Exhibition::delete_by_id(exhibition_id)
        .exec(&txn)
        .await
        .map_err(update_failed)?;

    txn.commit().await.map_err(update_failed)?;

    if deleted.rows_affected == 0 {
        debug!("No exhibition with id {} to delete.", exhibition_id);
        return Ok(false);
    }
    info!(
        "Deleted exhibition_id {} and {} of its tickets",
        exhibition_id, tickets.rows_affected
    );
    Ok(true)
}

/// Overwrites the name and date of the stored exhibition with the same id.
///
/// Returns `None` without writing anything when the id does not exist.
#[instrument(skip(db))]
pub async fn edit_exhibition<C: ConnectionTrait>(
    db: &C,
    edited: exhibition::Model,
) -> Result<Option<exhibition::Model>> {
    let Some(existing) = Exhibition::find_by_id(edited.id)
        .one(db)
        .await
        .map_err(update_failed)?
    else {
        return Ok(None);
    };

    let mut active: exhibition::ActiveModel = existing.into();
    active.name = Set(edited.name);
    active.date = Set(edited.date);
    let updated = active.update(db).await.map_err(update_failed)?;

    info!("Updated exhibition_id {}", updated.id);
    Ok(Some(updated))
}

/// Looks up an exhibition; `None` when the id does not exist.
pub async fn get_exhibition_by_id<C: ConnectionTrait>(
    db: &C,
    exhibition_id: i32,
) -> Result<Option<exhibition::Model>> {
    let found = Exhibition::find_by_id(exhibition_id).one(db).await?;
    debug!(
        "Exhibition lookup for id {}: found = {}",
        exhibition_id,
        found.is_some()
    );
    Ok(found)
}

/// All exhibitions, in insertion (id) order.
pub async fn get_all_exhibitions<C: ConnectionTrait>(db: &C) -> Result<Vec<exhibition::Model>> {
    Exhibition::find()
        .order_by_asc(exhibition::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::db::get_ticket_by_id;
    use crate::errors::Error;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    #[tokio::test]
    async fn test_add_and_get_exhibition() -> Result<()> {
        let db = setup_test_db().await?;

        let id = add_exhibition(
            &db,
            NewExhibition {
                name: "Impressionists".to_string(),
                date: test_date(2024, 3, 1),
            },
        )
        .await?;

        let found = get_exhibition_by_id(&db, id).await?.unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Impressionists");
        assert_eq!(found.date, test_date(2024, 3, 1));

        assert!(get_exhibition_by_id(&db, id + 1).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_exhibitions_in_id_order() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_all_exhibitions(&db).await?.is_empty());

        let first = create_test_exhibition(&db, "Zoology").await?;
        let second = create_test_exhibition(&db, "Astronomy").await?;

        let all = get_all_exhibitions(&db).await?;
        assert_eq!(all, vec![first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_exhibition_overwrites_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_exhibition(&db, "Old name").await?;

        let edited = edit_exhibition(
            &db,
            exhibition::Model {
                id: created.id,
                name: "New name".to_string(),
                date: test_date(2025, 12, 31),
            },
        )
        .await?
        .unwrap();
        assert_eq!(edited.name, "New name");

        let stored = get_exhibition_by_id(&db, created.id).await?.unwrap();
        assert_eq!(stored, edited);
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_missing_exhibition_returns_none() -> Result<()> {
        let db = setup_test_db().await?;

        let result = edit_exhibition(
            &db,
            exhibition::Model {
                id: 42,
                name: "Ghost".to_string(),
                date: test_date(2024, 1, 1),
            },
        )
        .await?;
        assert!(result.is_none());
        assert!(get_all_exhibitions(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_exhibition_cascades_to_tickets() -> Result<()> {
        let (db, exhibition, visitor, ticket) = setup_with_ticket().await?;
        let other = create_test_exhibition(&db, "Other").await?;
        let kept = create_test_ticket(&db, other.id, visitor.id, 20.0).await?;

        assert!(delete_exhibition(&db, exhibition.id).await?);

        assert!(get_exhibition_by_id(&db, exhibition.id).await?.is_none());
        assert!(get_ticket_by_id(&db, ticket.id).await?.is_none());
        assert!(get_ticket_by_id(&db, kept.id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_exhibition_returns_false() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(!delete_exhibition(&db, 7).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_update_failed() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_errors([DbErr::Custom("disk I/O error".to_string())])
            .into_connection();

        let result = delete_exhibition(&db, 1).await;
        assert!(matches!(result, Err(Error::UpdateFailed(_))));
    }
}
