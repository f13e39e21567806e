//! Database configuration module for the ticket center.
//!
//! This module opens the connection named by the configured database URL and creates
//! the `exhibitions`, `visitors` and `tickets` tables from the entity definitions.
//! `SeaORM`'s `Schema::create_table_from_entity` derives the columns and the cascading
//! foreign keys from the models, so the schema always matches the Rust structs.

use crate::entities::{Exhibition, Ticket, Visitor};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Establishes a connection to the database at `database_url`.
///
/// Both `sqlite://` and `postgres://` URLs are accepted. For `SQLite` the sqlx driver
/// enables `PRAGMA foreign_keys` on every connection, which the cascading deletes rely on.
#[instrument(skip(database_url))]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Database connection opened.");
    Ok(db)
}

/// Creates all tables that do not exist yet.
///
/// Tables are created parents first so the `tickets` foreign keys resolve. Running this
/// against an existing database is a no-op.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut exhibition_table = schema.create_table_from_entity(Exhibition);
    let mut visitor_table = schema.create_table_from_entity(Visitor);
    let mut ticket_table = schema.create_table_from_entity(Ticket);
    exhibition_table.if_not_exists();
    visitor_table.if_not_exists();
    ticket_table.if_not_exists();

    debug!("Executing CREATE TABLE IF NOT EXISTS statements.");
    db.execute(builder.build(&exhibition_table)).await?;
    db.execute(builder.build(&visitor_table)).await?;
    db.execute(builder.build(&ticket_table)).await?;

    info!("Database tables ensured.");
    Ok(())
}
