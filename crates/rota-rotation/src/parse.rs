//! Line-oriented rotation file parser.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::{
  Entry, Rotation,
  error::{Error, Result},
};

/// Parse a complete rotation file.
pub fn parse(input: &str) -> Result<Rotation> {
  let mut metadata = HashMap::new();
  let mut entries: Vec<Entry> = Vec::new();

  for (idx, raw) in input.lines().enumerate() {
    let line_no = idx + 1;
    let line = raw.trim();

    if let Some(meta) = line.strip_prefix("#@") {
      let (key, value) = match meta.split_once(':') {
        Some((k, v)) => (k.trim(), v.trim()),
        None => (meta.trim(), ""),
      };
      metadata.insert(key.to_string(), value.to_string());
      continue;
    }
    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    let entry = parse_entry(line, line_no)?;
    if let Some(prev) = entries.last() {
      if prev.start >= entry.start {
        return Err(Error::OutOfOrder {
          line: line_no,
          prev: prev.start,
          next: entry.start,
        });
      }
    }
    entries.push(entry);
  }

  if entries.is_empty() {
    return Err(Error::NoEntries);
  }

  // Close the spans: each entry ends at the next start, the last 365 days
  // past its own start.
  for i in 1..entries.len() {
    entries[i - 1].end = entries[i].start;
  }
  if let Some(last) = entries.last_mut() {
    last.end = last.start + Duration::days(365);
  }

  Ok(Rotation::from_parts(entries, metadata))
}

/// Parse one `RFC3339-timestamp | data words` line. The span end is filled
/// in by the caller once the following entry is known.
fn parse_entry(line: &str, line_no: usize) -> Result<Entry> {
  let mut fields = line.split_whitespace();

  let stamp = fields.next().unwrap_or_default();
  let start = DateTime::parse_from_rfc3339(stamp)
    .map_err(|_| Error::InvalidTimestamp {
      line:  line_no,
      value: stamp.to_string(),
    })?
    .with_timezone(&Utc);

  if fields.next() != Some("|") {
    return Err(Error::MissingSeparator { line: line_no });
  }

  Ok(Entry {
    start,
    end: start,
    data: fields.map(str::to_string).collect(),
  })
}
