//! The week-window state machine.
//!
//! A [`WeekWindow`] owns the reference date and the load state for the week
//! being viewed. It is fully synchronous: fetch-issuing operations hand back
//! a [`FetchTicket`], the caller performs the fetch however it likes, and
//! feeds the result back through [`WeekWindow::apply`].
//!
//! Tickets carry the generation at which they were issued. `apply` ignores
//! any ticket that is not the most recently issued one, so when navigation
//! supersedes an in-flight fetch the late arrival cannot overwrite the newer
//! week's state. Superseded fetches need not be aborted; discarding their
//! results on arrival is sufficient.

use crate::{
  roster::RosterPayload,
  source::RosterSource,
  week::{self, ReferenceDate, RosterQuery},
};

// ─── Load state ──────────────────────────────────────────────────────────────

/// The three-way outcome of the most recent fetch for the viewed week.
///
/// Issuing a fetch always resets to a fresh `Pending`; no stale payload is
/// retained while a fetch is in flight, so a renderer never shows old data
/// and a loading indicator simultaneously.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
  /// No data yet for the current reference date (initial, or in flight).
  #[default]
  Pending,
  /// The last completed fetch succeeded.
  Ready(RosterPayload),
  /// The last completed fetch failed; `cause` is display-ready text.
  Failed { cause: String },
}

/// The resolution of one fetch, as fed back into the window.
pub type FetchOutcome = std::result::Result<RosterPayload, String>;

// ─── Fetch ticket ────────────────────────────────────────────────────────────

/// A claim check for one issued fetch.
///
/// Created only by the window's fetch-issuing operations; redeemed exactly
/// once via [`WeekWindow::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
  query:      RosterQuery,
  generation: u64,
}

impl FetchTicket {
  pub fn query(&self) -> &RosterQuery {
    &self.query
  }
}

// ─── Week window ─────────────────────────────────────────────────────────────

/// State machine tracking the week currently being viewed.
///
/// Mutation flows only through the navigation/refetch operations and
/// `apply`; renderers read snapshots via [`WeekWindow::reference_date`] and
/// [`WeekWindow::load_state`].
#[derive(Debug)]
pub struct WeekWindow {
  reference_date: ReferenceDate,
  load_state:     LoadState,
  generation:     u64,
}

impl WeekWindow {
  /// Open a window anchored at `today`, in `Pending` with nothing issued.
  pub fn open(today: ReferenceDate) -> Self {
    Self {
      reference_date: today,
      load_state:     LoadState::Pending,
      generation:     0,
    }
  }

  /// Issue the mount-time fetch. The query is dateless: the backend answers
  /// for its own "now", matching the initial page load.
  ///
  /// Called exactly once by the owning lifecycle.
  pub fn initialize(&mut self) -> FetchTicket {
    self.issue(RosterQuery::current())
  }

  /// Advance one week and issue a fetch for the new date.
  ///
  /// Unbounded: there is no future ceiling.
  pub fn navigate_forward(&mut self) -> FetchTicket {
    self.reference_date = week::week_forward(self.reference_date);
    self.issue(RosterQuery::on(self.reference_date))
  }

  /// Retreat one week and issue a fetch for the new date.
  ///
  /// Unbounded: there is no past floor.
  pub fn navigate_back(&mut self) -> FetchTicket {
    self.reference_date = week::week_back(self.reference_date);
    self.issue(RosterQuery::on(self.reference_date))
  }

  /// Re-issue a fetch for the current reference date (manual retry).
  pub fn refetch(&mut self) -> FetchTicket {
    self.issue(RosterQuery::on(self.reference_date))
  }

  fn issue(&mut self, query: RosterQuery) -> FetchTicket {
    self.generation += 1;
    self.load_state = LoadState::Pending;
    FetchTicket { query, generation: self.generation }
  }

  /// Feed a fetch resolution back into the machine.
  ///
  /// Returns `false` (leaving the state untouched) if `ticket` has been
  /// superseded by a later-issued fetch: last navigation wins.
  pub fn apply(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
    if ticket.generation != self.generation {
      return false;
    }
    self.load_state = match outcome {
      Ok(roster) => LoadState::Ready(roster),
      Err(cause) => LoadState::Failed { cause },
    };
    true
  }

  // ── Read surface ──────────────────────────────────────────────────────────

  pub fn reference_date(&self) -> ReferenceDate {
    self.reference_date
  }

  pub fn load_state(&self) -> &LoadState {
    &self.load_state
  }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// A window bundled with a source, driving each fetch to completion inline.
///
/// This is the simplest correct consumer: each operation issues a ticket,
/// awaits the source, and applies the outcome before returning. Consumers
/// that must stay responsive mid-flight (a UI event loop) drive tickets
/// themselves on spawned tasks instead.
pub struct RosterSession<S> {
  window: WeekWindow,
  source: S,
}

impl<S: RosterSource> RosterSession<S> {
  pub fn new(source: S, today: ReferenceDate) -> Self {
    Self { window: WeekWindow::open(today), source }
  }

  /// Perform the mount-time fetch.
  pub async fn initialize(&mut self) {
    let ticket = self.window.initialize();
    self.resolve(ticket).await;
  }

  pub async fn navigate_forward(&mut self) {
    let ticket = self.window.navigate_forward();
    self.resolve(ticket).await;
  }

  pub async fn navigate_back(&mut self) {
    let ticket = self.window.navigate_back();
    self.resolve(ticket).await;
  }

  pub async fn refetch(&mut self) {
    let ticket = self.window.refetch();
    self.resolve(ticket).await;
  }

  async fn resolve(&mut self, ticket: FetchTicket) {
    let outcome = self
      .source
      .fetch_roster(ticket.query())
      .await
      .map_err(|e| e.to_string());
    if !self.window.apply(ticket, outcome) {
      tracing::debug!("discarded superseded roster fetch");
    }
  }

  pub fn reference_date(&self) -> ReferenceDate {
    self.window.reference_date()
  }

  pub fn load_state(&self) -> &LoadState {
    self.window.load_state()
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::roster::{ActionStyle, Event, Person, Tier};

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn tier(title: &str) -> Tier {
    Tier {
      title:        title.to_string(),
      subheader:    String::new(),
      on_call:      Person {
        display_name:  "alice".to_string(),
        profile_url:   "https://github.com/alice".to_string(),
        end_date:      "Jan 8".to_string(),
        contact_label: String::new(),
        contact_url:   String::new(),
      },
      action_label: String::new(),
      action_style: ActionStyle::Text,
    }
  }

  fn roster(titles: &[&str]) -> RosterPayload {
    RosterPayload {
      tiers:  titles.iter().map(|t| tier(t)).collect(),
      events: Vec::new(),
    }
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  #[test]
  fn opens_pending_at_today() {
    let w = WeekWindow::open(date(2021, 1, 4));
    assert_eq!(w.reference_date(), date(2021, 1, 4));
    assert_eq!(*w.load_state(), LoadState::Pending);
  }

  #[test]
  fn initialize_issues_dateless_query() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let ticket = w.initialize();
    assert_eq!(*ticket.query(), RosterQuery::Current);
    assert_eq!(*w.load_state(), LoadState::Pending);
  }

  #[test]
  fn success_transitions_to_ready() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let ticket = w.initialize();
    assert!(w.apply(ticket, Ok(roster(&["Serving"]))));
    let LoadState::Ready(r) = w.load_state() else {
      panic!("expected Ready")
    };
    assert_eq!(r.tiers[0].title, "Serving");
  }

  #[test]
  fn failure_transitions_to_failed() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let ticket = w.initialize();
    assert!(w.apply(ticket, Err("boom".to_string())));
    assert_eq!(
      *w.load_state(),
      LoadState::Failed { cause: "boom".to_string() },
    );
  }

  #[test]
  fn navigation_moves_date_and_resets_to_pending() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let ticket = w.initialize();
    w.apply(ticket, Ok(roster(&["Serving"])));

    let forward = w.navigate_forward();
    assert_eq!(w.reference_date(), date(2021, 1, 11));
    assert_eq!(*w.load_state(), LoadState::Pending);
    assert_eq!(*forward.query(), RosterQuery::on(date(2021, 1, 11)));

    let back = w.navigate_back();
    assert_eq!(w.reference_date(), date(2021, 1, 4));
    assert_eq!(*back.query(), RosterQuery::on(date(2021, 1, 4)));
  }

  #[test]
  fn navigation_from_failed_can_recover() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let ticket = w.initialize();
    w.apply(ticket, Err("endpoint unreachable".to_string()));

    let ticket = w.navigate_forward();
    assert_eq!(*w.load_state(), LoadState::Pending);
    assert!(w.apply(ticket, Ok(roster(&["Serving"]))));
    assert!(matches!(w.load_state(), LoadState::Ready(_)));
  }

  #[test]
  fn refetch_queries_the_current_date() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    w.initialize();
    w.navigate_forward();
    let ticket = w.refetch();
    assert_eq!(*ticket.query(), RosterQuery::on(date(2021, 1, 11)));
  }

  // ── Stale-response guard ──────────────────────────────────────────────────

  #[test]
  fn last_navigation_wins_over_late_arrivals() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let stale = w.initialize();
    let fresh = w.navigate_forward();

    // The newer fetch resolves first and sticks.
    assert!(w.apply(fresh, Ok(roster(&["Serving"]))));

    // The superseded fetch resolves afterwards and is discarded.
    assert!(!w.apply(stale, Ok(roster(&["Old week"]))));
    let LoadState::Ready(r) = w.load_state() else {
      panic!("expected Ready")
    };
    assert_eq!(r.tiers[0].title, "Serving");
  }

  #[test]
  fn stale_arrival_does_not_clobber_pending() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let stale = w.initialize();
    let _fresh = w.navigate_back();

    // The old fetch resolves while the new one is still in flight; the
    // window must stay Pending for the new date.
    assert!(!w.apply(stale, Err("timeout".to_string())));
    assert_eq!(*w.load_state(), LoadState::Pending);
    assert_eq!(w.reference_date(), date(2020, 12, 28));
  }

  #[test]
  fn a_ticket_resolves_at_most_once() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let ticket = w.initialize();
    assert!(w.apply(ticket.clone(), Ok(roster(&["Serving"]))));
    // A second resolution for the same generation would normally be a bug
    // upstream; it is accepted only while that generation is still current.
    let refetched = w.refetch();
    assert!(!w.apply(ticket, Err("late duplicate".to_string())));
    assert!(w.apply(refetched, Ok(roster(&["Serving"]))));
  }

  // ── Order preservation ────────────────────────────────────────────────────

  #[test]
  fn payload_order_is_preserved() {
    let mut w = WeekWindow::open(date(2021, 1, 4));
    let ticket = w.initialize();
    let mut payload = roster(&["Serving", "Eventing"]);
    payload.events.push(Event {
      title:         "ToC Working Group Update".to_string(),
      subheader:     String::new(),
      working_group: "Networking WG".to_string(),
      when:          "March 4, 2021 @ 8:30".to_string(),
      action_label:  String::new(),
      action_style:  ActionStyle::Text,
    });
    w.apply(ticket, Ok(payload));

    let LoadState::Ready(r) = w.load_state() else {
      panic!("expected Ready")
    };
    assert_eq!(r.tiers[0].title, "Serving");
    assert_eq!(r.tiers[1].title, "Eventing");
    assert_eq!(r.events[0].working_group, "Networking WG");
  }

  // ── Session ───────────────────────────────────────────────────────────────

  /// Scripted source: answers with a roster titled after the query it saw.
  struct EchoSource {
    fail: bool,
  }

  impl RosterSource for EchoSource {
    type Error = std::io::Error;

    fn fetch_roster<'a>(
      &'a self,
      query: &'a RosterQuery,
    ) -> impl Future<Output = Result<RosterPayload, Self::Error>> + Send + 'a
    {
      async move {
        if self.fail {
          return Err(std::io::Error::other("connection refused"));
        }
        let title = match query.timestamp() {
          None => "current".to_string(),
          Some(ts) => ts,
        };
        Ok(roster(&[title.as_str()]))
      }
    }
  }

  #[tokio::test]
  async fn session_walks_the_mount_and_navigate_cycle() {
    let mut session =
      RosterSession::new(EchoSource { fail: false }, date(2021, 1, 4));

    session.initialize().await;
    let LoadState::Ready(r) = session.load_state() else {
      panic!("expected Ready after initialize")
    };
    assert_eq!(r.tiers[0].title, "current");

    session.navigate_forward().await;
    assert_eq!(session.reference_date(), date(2021, 1, 11));
    let LoadState::Ready(r) = session.load_state() else {
      panic!("expected Ready after navigation")
    };
    assert_eq!(r.tiers[0].title, "2021-01-11T00:00:00Z");
  }

  #[tokio::test]
  async fn session_converts_source_errors_to_failed() {
    let mut session =
      RosterSession::new(EchoSource { fail: true }, date(2021, 1, 4));
    session.initialize().await;
    let LoadState::Failed { cause } = session.load_state() else {
      panic!("expected Failed")
    };
    assert!(cause.contains("connection refused"));
  }
}
