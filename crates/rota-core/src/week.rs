//! Week arithmetic and query derivation.
//!
//! Navigation moves the reference date by whole calendar weeks, never by
//! elapsed hours, so crossing a daylight-saving transition cannot drift the
//! date. At the edges of chrono's representable calendar the date clamps in
//! place rather than panicking.

use chrono::{Days, NaiveDate};

/// The calendar date anchoring "the week currently displayed".
pub type ReferenceDate = NaiveDate;

/// The query one fetch asks the roster backend.
///
/// The initial fetch carries no date (the backend answers for "now"); every
/// navigated or re-issued fetch pins the backend to the reference date.
/// Deriving a query from a date is a pure function: equal dates produce
/// equal queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterQuery {
  /// `GET /now` — let the backend use its own clock.
  Current,
  /// `GET /now?on=<timestamp>` — midnight UTC of the reference date.
  On(ReferenceDate),
}

impl RosterQuery {
  pub fn current() -> Self {
    RosterQuery::Current
  }

  pub fn on(date: ReferenceDate) -> Self {
    RosterQuery::On(date)
  }

  /// The `on` parameter value, if this query carries a date.
  ///
  /// Rendered as RFC 3339 at midnight UTC (`2021-01-11T00:00:00Z`).
  /// URL-encoding is the transport's job, not ours.
  pub fn timestamp(&self) -> Option<String> {
    match self {
      RosterQuery::Current => None,
      RosterQuery::On(date) => {
        Some(format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
      }
    }
  }
}

/// The same calendar day one week later, clamped at the calendar edge.
pub fn week_forward(date: ReferenceDate) -> ReferenceDate {
  date.checked_add_days(Days::new(7)).unwrap_or(date)
}

/// The same calendar day one week earlier, clamped at the calendar edge.
pub fn week_back(date: ReferenceDate) -> ReferenceDate {
  date.checked_sub_days(Days::new(7)).unwrap_or(date)
}
