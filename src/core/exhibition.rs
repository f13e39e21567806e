//! Exhibition business logic.
//!
//! Names are trimmed and must not be empty. Dates arrive already normalized to UTC
//! (see [`input::parse_date`](crate::core::input::parse_date)).

use crate::{
    core::input,
    db,
    entities::{EntityKind, exhibition},
    errors::{Error, Result},
    models::NewExhibition,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

/// Creates an exhibition after validating its name.
pub async fn add_exhibition(
    db: &DatabaseConnection,
    name: &str,
    date: DateTime<Utc>,
) -> Result<exhibition::Model> {
    let name = input::validate_name(name)?;
    let id = db::add_exhibition(
        db,
        NewExhibition {
            name: name.clone(),
            date,
        },
    )
    .await?;
    Ok(exhibition::Model { id, name, date })
}

/// Finds an exhibition by id, failing with `NotFound` when it does not exist.
pub async fn get_exhibition(db: &DatabaseConnection, id: i32) -> Result<exhibition::Model> {
    db::get_exhibition_by_id(db, id)
        .await?
        .ok_or(Error::NotFound {
            entity: EntityKind::Exhibition,
            id,
        })
}

/// Replaces the name and date of an existing exhibition.
pub async fn edit_exhibition(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    date: DateTime<Utc>,
) -> Result<exhibition::Model> {
    let name = input::validate_name(name)?;
    db::edit_exhibition(db, exhibition::Model { id, name, date })
        .await?
        .ok_or(Error::NotFound {
            entity: EntityKind::Exhibition,
            id,
        })
}

/// Deletes an exhibition and its tickets. Returns whether it existed.
pub async fn delete_exhibition(db: &DatabaseConnection, id: i32) -> Result<bool> {
    db::delete_exhibition(db, id).await
}

/// All exhibitions, in id order.
pub async fn list_exhibitions(db: &DatabaseConnection) -> Result<Vec<exhibition::Model>> {
    db::get_all_exhibitions(db).await
}
