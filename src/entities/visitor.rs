//! Visitor entity - A person holding tickets, with a personal discount percentage.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Visitor database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visitors")]
pub struct Model {
    /// Unique identifier for the visitor
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Visitor's name (never empty)
    pub name: String,
    /// Discount in percent, always within `0..=100`
    pub discount: i32,
}

/// Defines relationships between Visitor and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One visitor holds many tickets
    #[sea_orm(has_many = "super::ticket::Entity")]
    Tickets,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
