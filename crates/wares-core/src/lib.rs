//! Core record types and the bundled dataset for the Wares sample commerce
//! database.
//!
//! This crate is deliberately free of database dependencies. The storage
//! crate depends on it; it depends on nothing heavier than chrono and serde.

pub mod catalog;
pub mod customer;
pub mod dataset;
pub mod discount;
pub mod error;
pub mod inventory;
pub mod order;
pub mod review;

pub use dataset::Dataset;
pub use error::{Error, Result};
