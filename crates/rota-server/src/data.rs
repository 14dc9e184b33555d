//! Roster assembly from the data directory.
//!
//! Layout under `data_dir`:
//!
//! ```text
//! data/
//! ├── rotations/        one rotation file per tier, filename order
//! ├── events.toml       optional `[[events]]` tables
//! └── www/              static site (served by the fallback)
//! ```
//!
//! Unreadable or malformed inputs are logged and skipped; the endpoint
//! always answers with whatever loaded.

use std::path::Path;

use chrono::{DateTime, Utc};
use rota_core::wire::{WireEvent, WireOnCall, WireRoster, WireTier};
use rota_rotation::Rotation;
use serde::Deserialize;
use tracing::warn;

/// Month name, day, year — "March 8, 2021".
const SPAN_DATE_FORMAT: &str = "%B %-d, %Y";

/// Assemble the wire document for `instant`.
pub fn load_roster(data_dir: &Path, instant: DateTime<Utc>) -> WireRoster {
  WireRoster {
    support: load_tiers(data_dir, instant),
    events:  load_events(data_dir),
  }
}

// ─── Tiers ───────────────────────────────────────────────────────────────────

fn load_tiers(data_dir: &Path, instant: DateTime<Utc>) -> Vec<WireTier> {
  let dir = data_dir.join("rotations");
  let entries = match std::fs::read_dir(&dir) {
    Ok(entries) => entries,
    Err(e) => {
      warn!("unable to open {}: {e}", dir.display());
      return Vec::new();
    }
  };

  let mut paths: Vec<_> = entries
    .filter_map(|e| e.ok())
    .map(|e| e.path())
    .collect();
  paths.sort();

  let mut tiers = Vec::new();
  for path in paths {
    let rotation = match Rotation::from_path(&path) {
      Ok(r) => r,
      Err(e) => {
        warn!("skipping rotation {}: {e}", path.display());
        continue;
      }
    };
    tiers.push(tier_for(&rotation, instant));
  }
  tiers
}

fn tier_for(rotation: &Rotation, instant: DateTime<Utc>) -> WireTier {
  let entry = rotation.at(instant);
  let login = entry.data.first().cloned().unwrap_or_default();
  let meta =
    |key: &str| rotation.metadata.get(key).cloned().unwrap_or_default();

  WireTier {
    title:          meta("title"),
    subheader:      String::new(),
    on_call:        WireOnCall {
      name:            login.clone(),
      github:          format!("https://github.com/{login}"),
      start:           Some(entry.start.format(SPAN_DATE_FORMAT).to_string()),
      end:             entry.end.format(SPAN_DATE_FORMAT).to_string(),
      questions:       meta("slack"),
      questions_slack: meta("slacklink"),
    },
    button_text:    String::new(),
    button_variant: Default::default(),
  }
}

// ─── Events ──────────────────────────────────────────────────────────────────

/// `events.toml` carries the wire field names directly.
#[derive(Debug, Default, Deserialize)]
struct EventsFile {
  #[serde(default)]
  events: Vec<WireEvent>,
}

fn load_events(data_dir: &Path) -> Vec<WireEvent> {
  let path = data_dir.join("events.toml");
  let raw = match std::fs::read_to_string(&path) {
    Ok(raw) => raw,
    // Missing file simply means no events this week.
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
    Err(e) => {
      warn!("unable to read {}: {e}", path.display());
      return Vec::new();
    }
  };

  match toml::from_str::<EventsFile>(&raw) {
    Ok(file) => file.events,
    Err(e) => {
      warn!("skipping {}: {e}", path.display());
      Vec::new()
    }
  }
}
