//! Error types for `wares-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Two dataset rows share a primary key or unique column value.
  #[error("duplicate key in {table}: {key}")]
  DuplicateKey { table: &'static str, key: String },

  #[error("{table}.{column} references missing id {id}")]
  DanglingReference {
    table:  &'static str,
    column: &'static str,
    id:     i64,
  },

  #[error("review {review_id} has rating {rating}, expected 1..=5")]
  RatingOutOfRange { review_id: i64, rating: i64 },

  #[error("category {category_id} is part of a parent cycle")]
  CategoryCycle { category_id: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
