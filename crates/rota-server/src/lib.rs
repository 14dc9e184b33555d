//! Roster server — the `/now` endpoint plus the static site.
//!
//! Exposes an axum [`Router`] answering `GET /now` with the wire roster
//! document assembled from rotation files on disk; every other path falls
//! through to static file serving of the site directory.

pub mod data;
pub mod error;
pub mod now;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROTA_*` environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:     String,
  #[serde(default = "default_port")]
  pub port:     u16,
  /// Directory holding `rotations/`, `events.toml`, and the site.
  #[serde(default = "default_data_dir")]
  pub data_dir: PathBuf,
  /// Site directory, relative to `data_dir`.
  #[serde(default = "default_www_dir")]
  pub www_dir:  PathBuf,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8080
}

fn default_data_dir() -> PathBuf {
  PathBuf::from("data")
}

fn default_www_dir() -> PathBuf {
  PathBuf::from("www")
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:     default_host(),
      port:     default_port(),
      data_dir: default_data_dir(),
      www_dir:  default_www_dir(),
    }
  }
}

impl ServerConfig {
  pub fn www_path(&self) -> PathBuf {
    self.data_dir.join(&self.www_dir)
  }
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<ServerConfig>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the roster server.
pub fn router(state: AppState) -> Router {
  let www = state.config.www_path();
  Router::new()
    .route("/now", get(now::handler))
    .fallback_service(ServeDir::new(www))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
