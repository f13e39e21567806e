//! Exhibition entity - A dated event that visitors buy tickets to attend.
//!
//! The date is stored as a UTC timestamp at midnight of the chosen day.
//! Deleting an exhibition removes every ticket sold for it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Exhibition database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exhibitions")]
pub struct Model {
    /// Unique identifier for the exhibition
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name of the exhibition (never empty)
    pub name: String,
    /// Day of the exhibition, normalized to midnight UTC
    pub date: DateTimeUtc,
}

/// Defines relationships between Exhibition and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One exhibition has many tickets
    #[sea_orm(has_many = "super::ticket::Entity")]
    Tickets,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
