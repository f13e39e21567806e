//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod exhibition;
pub mod ticket;
pub mod visitor;

use std::fmt;

// Re-export specific types to avoid conflicts
pub use exhibition::{Column as ExhibitionColumn, Entity as Exhibition, Model as ExhibitionModel};
pub use ticket::{Column as TicketColumn, Entity as Ticket, Model as TicketModel};
pub use visitor::{Column as VisitorColumn, Entity as Visitor, Model as VisitorModel};

/// Names one of the three stored entity kinds, used in errors and messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// An exhibition row
    Exhibition,
    /// A ticket row
    Ticket,
    /// A visitor row
    Visitor,
}

impl EntityKind {
    /// Lowercase form used inside sentences ("exhibition's name").
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Exhibition => "exhibition",
            Self::Ticket => "ticket",
            Self::Visitor => "visitor",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exhibition => "Exhibition",
            Self::Ticket => "Ticket",
            Self::Visitor => "Visitor",
        };
        f.write_str(name)
    }
}
