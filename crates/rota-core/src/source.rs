//! The `RosterSource` trait — abstraction over the roster fetch.
//!
//! Implemented by transports (e.g. `rota-source-http`). The window machinery
//! and its consumers depend on this abstraction, not on any concrete
//! transport.

use std::future::Future;

use crate::{roster::RosterPayload, week::RosterQuery};

/// Abstraction over a roster data source.
///
/// Returns `Send` futures so implementations can be driven from
/// multi-threaded async runtimes and fetches can run on spawned tasks.
pub trait RosterSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Resolve the roster for `query`.
  ///
  /// A failure here is a normal outcome, not an exceptional one: callers
  /// convert it into the window's `Failed` state and keep running.
  fn fetch_roster<'a>(
    &'a self,
    query: &'a RosterQuery,
  ) -> impl Future<Output = Result<RosterPayload, Self::Error>> + Send + 'a;
}
