//! Error type for `wares-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The dataset failed pre-flight verification; nothing was written.
  #[error("dataset error: {0}")]
  Dataset(#[from] wares_core::Error),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  /// Creating the database's parent directory failed.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
