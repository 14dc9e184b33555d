//! Integration tests against a scripted upstream on an ephemeral port.

use std::collections::HashMap;

use axum::{
  Json, Router,
  extract::Query,
  http::StatusCode,
  routing::get,
};
use rota_core::{
  source::RosterSource,
  week::RosterQuery,
};
use rota_source_http::{Error, HttpRosterSource, SourceConfig};

/// Serve `router` on an ephemeral localhost port; returns the base URL.
async fn serve(router: Router) -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
    .await
    .expect("bind ephemeral port");
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router).await.unwrap();
  });
  format!("http://{addr}")
}

fn source(base_url: &str) -> HttpRosterSource {
  HttpRosterSource::new(SourceConfig::new(base_url)).expect("build source")
}

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
  chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ─── Success ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn decodes_a_successful_response() {
  let router = Router::new().route(
    "/now",
    get(|| async {
      Json(serde_json::json!({
        "support": [
          {"title": "Serving",
           "onCall": {"name": "@a", "github": "https://github.com/a", "end": "Jan 8"}},
          {"title": "Eventing",
           "onCall": {"name": "@b", "github": "https://github.com/b", "end": "Jan 8"}}
        ],
        "events": []
      }))
    }),
  );
  let base = serve(router).await;

  let payload = source(&base)
    .fetch_roster(&RosterQuery::current())
    .await
    .unwrap();
  let titles: Vec<_> =
    payload.tiers.iter().map(|t| t.title.as_str()).collect();
  assert_eq!(titles, ["Serving", "Eventing"]);
  assert!(payload.events.is_empty());
}

#[tokio::test]
async fn forwards_the_on_parameter() {
  // Echo the `on` parameter back as the sole tier title.
  let router = Router::new().route(
    "/now",
    get(|Query(params): Query<HashMap<String, String>>| async move {
      let on = params.get("on").cloned().unwrap_or_else(|| "absent".into());
      Json(serde_json::json!({
        "support": [
          {"title": on,
           "onCall": {"name": "x", "github": "g", "end": "e"}}
        ]
      }))
    }),
  );
  let base = serve(router).await;
  let src = source(&base);

  let dated = src
    .fetch_roster(&RosterQuery::on(date(2021, 1, 11)))
    .await
    .unwrap();
  assert_eq!(dated.tiers[0].title, "2021-01-11T00:00:00Z");

  let current = src.fetch_roster(&RosterQuery::current()).await.unwrap();
  assert_eq!(current.tiers[0].title, "absent");
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn non_2xx_status_is_a_status_error() {
  let router = Router::new().route(
    "/now",
    get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
  );
  let base = serve(router).await;

  let err = source(&base)
    .fetch_roster(&RosterQuery::current())
    .await
    .unwrap_err();
  match err {
    Error::Status(status) => assert_eq!(status.as_u16(), 500),
    other => panic!("expected Status, got {other:?}"),
  }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
  let router =
    Router::new().route("/now", get(|| async { "<html>not json</html>" }));
  let base = serve(router).await;

  let err = source(&base)
    .fetch_roster(&RosterQuery::current())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn duplicate_tier_titles_are_an_invalid_error() {
  let router = Router::new().route(
    "/now",
    get(|| async {
      Json(serde_json::json!({
        "support": [
          {"title": "Serving", "onCall": {"name": "a", "github": "g", "end": "e"}},
          {"title": "Serving", "onCall": {"name": "b", "github": "g", "end": "e"}}
        ]
      }))
    }),
  );
  let base = serve(router).await;

  let err = source(&base)
    .fetch_roster(&RosterQuery::current())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Invalid(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
  // Bind-then-drop guarantees nothing is listening on the port.
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let err = source(&format!("http://{addr}"))
    .fetch_roster(&RosterQuery::current())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Network(_)), "got {err:?}");
}
