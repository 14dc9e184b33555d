//! Application state and event dispatcher.
//!
//! Fetches run on spawned tasks and resolve back through an mpsc channel
//! carrying the ticket they were issued with, so navigation stays operable
//! while a fetch is in flight and a late stale response is discarded by the
//! window's generation guard.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use rota_core::{
  source::RosterSource,
  week::ReferenceDate,
  window::{FetchOutcome, FetchTicket, WeekWindow},
};
use tokio::sync::mpsc;

// ─── Actions ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Quit,
  PrevWeek,
  NextWeek,
  Refresh,
}

/// Map a key event to an action, if any.
pub fn action_for(key: KeyEvent) -> Option<Action> {
  match key.code {
    KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
    KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevWeek),
    KeyCode::Right | KeyCode::Char('l') => Some(Action::NextWeek),
    KeyCode::Char('r') => Some(Action::Refresh),
    _ => None,
  }
}

// ─── App ─────────────────────────────────────────────────────────────────────

type Resolution = (FetchTicket, FetchOutcome);

/// Top-level application state: a week window plus the plumbing that
/// resolves its fetches off the UI loop.
pub struct App<S> {
  pub window: WeekWindow,
  source:     Arc<S>,
  tx:         mpsc::UnboundedSender<Resolution>,
  rx:         mpsc::UnboundedReceiver<Resolution>,
}

impl<S: RosterSource + 'static> App<S> {
  /// Open the window at `today` and issue the mount-time fetch.
  pub fn new(source: S, today: ReferenceDate) -> Self {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = Self {
      window: WeekWindow::open(today),
      source: Arc::new(source),
      tx,
      rx,
    };
    let ticket = app.window.initialize();
    app.spawn_fetch(ticket);
    app
  }

  fn spawn_fetch(&self, ticket: FetchTicket) {
    let source = Arc::clone(&self.source);
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let outcome = source
        .fetch_roster(ticket.query())
        .await
        .map_err(|e| e.to_string());
      // The receiver only closes on shutdown; a failed send is fine.
      let _ = tx.send((ticket, outcome));
    });
  }

  /// Handle one key event. Returns `false` when the app should exit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    match action_for(key) {
      Some(Action::Quit) => return false,
      Some(Action::PrevWeek) => {
        let ticket = self.window.navigate_back();
        self.spawn_fetch(ticket);
      }
      Some(Action::NextWeek) => {
        let ticket = self.window.navigate_forward();
        self.spawn_fetch(ticket);
      }
      Some(Action::Refresh) => {
        let ticket = self.window.refetch();
        self.spawn_fetch(ticket);
      }
      None => {}
    }
    true
  }

  /// Apply any fetch resolutions that have arrived since the last frame.
  pub fn drain_resolutions(&mut self) {
    while let Ok((ticket, outcome)) = self.rx.try_recv() {
      if !self.window.apply(ticket, outcome) {
        tracing::debug!("discarded superseded roster fetch");
      }
    }
  }
}
