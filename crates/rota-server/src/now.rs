//! Handler for `GET /now`.

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::{DateTime, Utc};
use rota_core::wire::WireRoster;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct NowParams {
  /// RFC 3339 instant selecting the roster week; absent means "now".
  pub on: Option<String>,
}

/// `GET /now[?on=<RFC3339>]`
pub async fn handler(
  State(state): State<AppState>,
  Query(params): Query<NowParams>,
) -> Result<Json<WireRoster>, ApiError> {
  let instant = match &params.on {
    None => Utc::now(),
    Some(raw) => DateTime::parse_from_rfc3339(raw)
      .map_err(|e| {
        ApiError::BadRequest(format!("invalid `on` timestamp {raw:?}: {e}"))
      })?
      .with_timezone(&Utc),
  };

  Ok(Json(crate::data::load_roster(&state.config.data_dir, instant)))
}
