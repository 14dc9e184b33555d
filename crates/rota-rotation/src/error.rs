//! Error types for the rotation file codec.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("line {line}: invalid timestamp {value:?}")]
  InvalidTimestamp { line: usize, value: String },

  #[error("line {line}: expected \"<timestamp> | <data>\", missing \"|\"")]
  MissingSeparator { line: usize },

  #[error("line {line}: entries out of order: {prev} >= {next}")]
  OutOfOrder {
    line: usize,
    prev: DateTime<Utc>,
    next: DateTime<Utc>,
  },

  #[error("rotation has no entries")]
  NoEntries,

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
