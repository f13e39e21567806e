//! Core business logic - validated operations over exhibitions, visitors and tickets.
//!
//! Functions here check input, compute derived prices and call the repository in `db`.
//! Nothing in this module reads from or writes to the console, so the same operations
//! back the interactive front-end and the tests.

/// Exhibition operations
pub mod exhibition;
/// Parsing and validation of raw field input
pub mod input;
/// Cent rounding and discounted price computation
pub mod pricing;
/// Ticket count and discount statistics
pub mod statistics;
/// Ticket operations with foreign-key checks and pricing
pub mod ticket;
/// Visitor operations, including ticket repricing on discount changes
pub mod visitor;
