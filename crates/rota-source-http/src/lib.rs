//! HTTP implementation of [`RosterSource`] over the `/now` endpoint.
//!
//! Decoding is kept separate from transport so a malformed body and an
//! unreachable endpoint surface as different errors.

pub mod error;

use std::{future::Future, time::Duration};

use reqwest::Client;
use rota_core::{
  roster::RosterPayload,
  source::RosterSource,
  week::RosterQuery,
  wire::WireRoster,
};

pub use error::{Error, Result};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the roster endpoint.
#[derive(Debug, Clone)]
pub struct SourceConfig {
  /// Base URL of the server hosting `/now`, e.g. `http://localhost:8080`.
  pub base_url: String,
  /// Per-request timeout. The upstream endpoint imposes none of its own.
  pub timeout:  Duration,
}

impl SourceConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      timeout:  Duration::from_secs(30),
    }
  }
}

// ─── Source ──────────────────────────────────────────────────────────────────

/// Roster source backed by a shared HTTP client.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpRosterSource {
  client: Client,
  config: SourceConfig,
}

impl HttpRosterSource {
  pub fn new(config: SourceConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(Error::Network)?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!("{}/now", self.config.base_url.trim_end_matches('/'))
  }
}

impl RosterSource for HttpRosterSource {
  type Error = Error;

  fn fetch_roster<'a>(
    &'a self,
    query: &'a RosterQuery,
  ) -> impl Future<Output = Result<RosterPayload>> + Send + 'a {
    async move {
      let mut request = self.client.get(self.url());
      if let Some(ts) = query.timestamp() {
        // reqwest's query builder URL-encodes the timestamp.
        request = request.query(&[("on", ts)]);
      }

      tracing::debug!(url = %self.url(), on = ?query.timestamp(), "fetching roster");

      let response = request.send().await.map_err(Error::Network)?;
      let status = response.status();
      if !status.is_success() {
        return Err(Error::Status(status));
      }

      let body = response.bytes().await.map_err(Error::Network)?;
      let wire: WireRoster =
        serde_json::from_slice(&body).map_err(Error::Decode)?;
      RosterPayload::try_from(wire).map_err(Error::Invalid)
    }
  }
}
