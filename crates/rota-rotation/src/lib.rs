//! On-call rotation schedule files.
//!
//! A rotation file is line-oriented and easy for both humans and computers
//! to edit. Three kinds of lines:
//!
//! - blank lines and `# comment` lines, which are skipped;
//! - `#@ key: value` metadata lines;
//! - `RFC3339-timestamp | data words` rotation entries, ordered strictly
//!   oldest to newest.
//!
//! Each entry's span ends where the next begins; the final entry runs 365
//! days past its own start. A file may carry as much history or future
//! rotation as desired.
//!
//! Pure synchronous; no HTTP or async dependencies.

pub mod error;
mod parse;

use std::{collections::HashMap, path::Path};

use chrono::{DateTime, Utc};

pub use error::{Error, Result};

// ─── Public types ────────────────────────────────────────────────────────────

/// One span of a rotation: who (or what) holds the slot from `start` until
/// `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub start: DateTime<Utc>,
  pub end:   DateTime<Utc>,
  pub data:  Vec<String>,
}

/// A parsed rotation: ordered entries plus file-level metadata.
///
/// Only obtainable through parsing, which guarantees at least one entry.
#[derive(Debug, Clone)]
pub struct Rotation {
  entries:      Vec<Entry>,
  /// Key-value pairs from `#@` lines (e.g. `title`, `slack`, `slacklink`).
  pub metadata: HashMap<String, String>,
}

// ─── Construction ────────────────────────────────────────────────────────────

impl Rotation {
  /// Parse a rotation from file contents.
  pub fn parse(input: &str) -> Result<Self> {
    parse::parse(input)
  }

  /// Read and parse a rotation file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let raw = std::fs::read_to_string(path)?;
    Self::parse(&raw)
  }

  // ── Lookups ───────────────────────────────────────────────────────────────

  /// The entry whose span covers `t`, scanning newest to oldest for
  /// `start < t` (strictly — an instant exactly at a span's start still
  /// belongs to the previous span).
  ///
  /// Before the first entry this returns a synthetic "before rotation"
  /// entry ending at the first start. After the last entry's nominal end,
  /// the last entry still answers.
  pub fn at(&self, t: DateTime<Utc>) -> Entry {
    for entry in self.entries.iter().rev() {
      if entry.start < t {
        return entry.clone();
      }
    }
    Entry {
      start: DateTime::<Utc>::MIN_UTC,
      end:   self.entries[0].start,
      data:  vec!["before rotation".to_string()],
    }
  }

  /// The first entry starting strictly after `t`; the last entry if none
  /// does.
  pub fn next_after(&self, t: DateTime<Utc>) -> &Entry {
    self
      .entries
      .iter()
      .find(|e| e.start > t)
      .unwrap_or_else(|| self.entries.last().expect("rotation is non-empty"))
  }

  /// All entries in file order.
  pub fn entries(&self) -> &[Entry] {
    &self.entries
  }

  pub(crate) fn from_parts(
    entries: Vec<Entry>,
    metadata: HashMap<String, String>,
  ) -> Self {
    Self { entries, metadata }
  }
}
