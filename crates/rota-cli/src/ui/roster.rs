//! Roster body — renders the current load state.
//!
//! Each of the three states is visually distinct: a loading line, an error
//! line with the failure's cause, or the resolved tier and event cards.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};
use rota_core::{
  roster::{Event, RosterPayload, Tier},
  window::LoadState,
};

pub fn draw(f: &mut Frame, area: Rect, state: &LoadState) {
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let lines = match state {
    LoadState::Pending => vec![Line::from(Span::styled(
      "loading...",
      Style::default().fg(Color::Yellow),
    ))],
    LoadState::Failed { cause } => vec![Line::from(Span::styled(
      format!("Error: {cause}"),
      Style::default().fg(Color::Red),
    ))],
    LoadState::Ready(roster) => roster_lines(roster),
  };

  let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
  f.render_widget(paragraph, area);
}

// ─── Ready ───────────────────────────────────────────────────────────────────

fn roster_lines(roster: &RosterPayload) -> Vec<Line<'static>> {
  let mut lines = Vec::new();

  if roster.tiers.is_empty() && roster.events.is_empty() {
    lines.push(Line::from("Nothing on the roster this week."));
    return lines;
  }

  for tier in &roster.tiers {
    tier_lines(&mut lines, tier);
  }

  if !roster.events.is_empty() {
    lines.push(Line::from(Span::styled(
      "Events",
      Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    lines.push(Line::default());
    for event in &roster.events {
      event_lines(&mut lines, event);
    }
  }

  lines
}

fn tier_lines(lines: &mut Vec<Line<'static>>, tier: &Tier) {
  let mut title = vec![Span::styled(
    tier.title.clone(),
    Style::default().add_modifier(Modifier::BOLD),
  )];
  if !tier.subheader.is_empty() {
    title.push(Span::styled(
      format!("  {}", tier.subheader),
      Style::default().fg(Color::Gray),
    ));
  }
  lines.push(Line::from(title));

  let on_call = &tier.on_call;
  lines.push(Line::from(format!(
    "  {}  ({})",
    on_call.display_name, on_call.profile_url,
  )));
  lines.push(Line::from(Span::styled(
    format!("  On-call through {}", on_call.end_date),
    Style::default().fg(Color::Gray),
  )));
  if !on_call.contact_label.is_empty() {
    lines.push(Line::from(format!(
      "  Questions: {}  ({})",
      on_call.contact_label, on_call.contact_url,
    )));
  }
  if !tier.action_label.is_empty() {
    lines.push(Line::from(Span::styled(
      format!("  [{}]", tier.action_label),
      Style::default().fg(Color::Cyan),
    )));
  }
  lines.push(Line::default());
}

fn event_lines(lines: &mut Vec<Line<'static>>, event: &Event) {
  lines.push(Line::from(Span::styled(
    event.title.clone(),
    Style::default().add_modifier(Modifier::BOLD),
  )));
  lines.push(Line::from(format!("  {}", event.working_group)));
  lines.push(Line::from(Span::styled(
    format!("  {}", event.when),
    Style::default().fg(Color::Gray),
  )));
  if !event.action_label.is_empty() {
    lines.push(Line::from(Span::styled(
      format!("  [{}]", event.action_label),
      Style::default().fg(Color::Cyan),
    )));
  }
  lines.push(Line::default());
}
