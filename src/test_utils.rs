//! Shared test utilities for the ticket center.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{exhibition, input, ticket, visitor},
    entities,
    errors::Result,
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Midnight UTC of the given day.
///
/// # Panics
/// Panics if the date does not exist; tests only pass literal valid dates.
#[allow(clippy::unwrap_used)]
#[must_use]
pub fn test_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    input::date_to_utc(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

/// Creates a test exhibition dated 2024-01-15.
pub async fn create_test_exhibition(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::exhibition::Model> {
    exhibition::add_exhibition(db, name, test_date(2024, 1, 15)).await
}

/// Creates a test visitor with the given discount.
pub async fn create_test_visitor(
    db: &DatabaseConnection,
    name: &str,
    discount: i32,
) -> Result<entities::visitor::Model> {
    visitor::add_visitor(db, name, discount).await
}

/// Sells a test ticket through the validated path, so prices are derived as in production.
pub async fn create_test_ticket(
    db: &DatabaseConnection,
    exhibition_id: i32,
    visitor_id: i32,
    price: f64,
) -> Result<entities::ticket::Model> {
    ticket::add_ticket(
        db,
        ticket::TicketRequest {
            exhibition_id,
            visitor_id,
            price,
        },
    )
    .await
}

/// Sets up a complete test environment with one sold ticket.
///
/// The visitor has a 10% discount and the ticket costs 100.0, so its discounted
/// price is 90.0. Returns (db, exhibition, visitor, ticket).
pub async fn setup_with_ticket() -> Result<(
    DatabaseConnection,
    entities::exhibition::Model,
    entities::visitor::Model,
    entities::ticket::Model,
)> {
    let db = setup_test_db().await?;
    let exhibition = create_test_exhibition(&db, "Exhibition A").await?;
    let visitor = create_test_visitor(&db, "Visitor V", 10).await?;
    let ticket = create_test_ticket(&db, exhibition.id, visitor.id, 100.0).await?;
    Ok((db, exhibition, visitor, ticket))
}
