//! Roster payload — the resolved contents of one viewed week.
//!
//! A payload is immutable once built and shared read-only with whatever
//! renders it. The tier and event sequences are insertion-ordered; render
//! order is array order, nothing here sorts.

use serde::{Deserialize, Serialize};

/// Visual weight of a card's action button.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
  #[default]
  Text,
  Outlined,
  Contained,
}

/// The person currently holding an on-call assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
  pub display_name:  String,
  /// Profile page URL (a GitHub profile in practice).
  pub profile_url:   String,
  /// Human-readable end of the assignment, e.g. "March 8, 2021".
  pub end_date:      String,
  /// Label for the "where to ask questions" channel.
  pub contact_label: String,
  pub contact_url:   String,
}

impl Person {
  /// Avatar image URL derived from the profile URL.
  pub fn avatar_url(&self) -> String {
    format!("{}.png?size=60", self.profile_url)
  }
}

/// One team's on-call assignment entry.
///
/// `title` is unique within a payload; the decode boundary enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
  pub title:        String,
  pub subheader:    String,
  pub on_call:      Person,
  pub action_label: String,
  pub action_style: ActionStyle,
}

/// A scheduled recurring meeting occurring in the viewed week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
  pub title:         String,
  pub subheader:     String,
  pub working_group: String,
  pub when:          String,
  pub action_label:  String,
  pub action_style:  ActionStyle,
}

/// Everything the backend resolved for one week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterPayload {
  pub tiers:  Vec<Tier>,
  pub events: Vec<Event>,
}
