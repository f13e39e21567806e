//! Ticket entity - A purchase linking one visitor to one exhibition.
//!
//! Each ticket stores its base `price` and the `price_with_discount` derived from the
//! holder's discount. Both foreign keys cascade on delete, so removing the exhibition
//! or the visitor removes the ticket as well.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ticket database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    /// Unique identifier for the ticket
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Base price, rounded to cents
    pub price: f64,
    /// Price after the visitor's discount, rounded to cents
    pub price_with_discount: f64,
    /// ID of the visitor holding this ticket
    pub visitor_id: i32,
    /// ID of the exhibition this ticket admits to
    pub exhibition_id: i32,
}

/// Defines relationships between Ticket and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ticket belongs to one visitor
    #[sea_orm(
        belongs_to = "super::visitor::Entity",
        from = "Column::VisitorId",
        to = "super::visitor::Column::Id",
        on_delete = "Cascade"
    )]
    Visitor,
    /// Each ticket belongs to one exhibition
    #[sea_orm(
        belongs_to = "super::exhibition::Entity",
        from = "Column::ExhibitionId",
        to = "super::exhibition::Column::Id",
        on_delete = "Cascade"
    )]
    Exhibition,
}

impl Related<super::visitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visitor.def()
    }
}

impl Related<super::exhibition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exhibition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
