//! TUI rendering — header, roster body, status bar.

pub mod roster;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};
use rota_core::source::RosterSource;

use crate::app::App;

// ─── Root draw ───────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: RosterSource>(f: &mut Frame, app: &App<S>) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  roster::draw(f, rows[1], app.window.load_state());
  draw_status(f, rows[2], app);
}

// ─── Header ──────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let line = Line::from(Span::styled(
    " rota — weekly on-call roster",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  ));

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ──────────────────────────────────────────────────────────────

fn draw_status<S: RosterSource>(f: &mut Frame, area: Rect, app: &App<S>) {
  let week = app.window.reference_date().format("%-m/%-d/%Y");
  let left = Span::styled(
    format!(" Displaying week of {week}"),
    Style::default().fg(Color::White),
  );
  let right = Span::styled(
    "[←/h] prev  [→/l] next  [r] refresh  [q] quit ",
    Style::default().fg(Color::Gray),
  );

  let pad = area
    .width
    .saturating_sub(left.content.chars().count() as u16)
    .saturating_sub(right.content.chars().count() as u16);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}
