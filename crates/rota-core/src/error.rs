//! Error types for `rota-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate tier title: {0:?}")]
  DuplicateTierTitle(String),

  #[error("roster decode error: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
