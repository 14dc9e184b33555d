//! Error types for the HTTP roster source.
//!
//! The window collapses every failure into its `Failed` state, but the
//! distinction between transport, status, and decode problems is kept here
//! for diagnostics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Transport-level failure: endpoint unreachable, timeout, broken body.
  #[error("network error: {0}")]
  Network(#[source] reqwest::Error),

  /// The endpoint answered with a non-2xx status.
  #[error("unexpected status: {0}")]
  Status(reqwest::StatusCode),

  /// The body is not the JSON shape the wire contract promises.
  #[error("malformed roster body: {0}")]
  Decode(#[source] serde_json::Error),

  /// Well-formed JSON that violates a payload invariant.
  #[error("invalid roster payload: {0}")]
  Invalid(#[source] rota_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
