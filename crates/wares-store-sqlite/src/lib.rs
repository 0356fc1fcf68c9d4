//! SQLite backend for the Wares sample-database seeder.
//!
//! Declares the eleven-table schema idempotently and fills it with the
//! bundled dataset using duplicate-tolerant inserts, so re-running the seeder
//! against an existing file neither fails nor changes row counts.

mod encode;
mod schema;
mod store;

pub mod error;
pub mod report;

pub use error::{Error, Result};
pub use report::{SeedReport, TableGroup, TableSeed};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
