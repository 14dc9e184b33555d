//! The wire vocabulary of the `/now` endpoint.
//!
//! This module is the single place that speaks the external JSON field names
//! (`support`, `onCall`, `buttonVariant`, ...). The server serialises these
//! structs; clients decode them and convert into [`RosterPayload`] via
//! `TryFrom`, which also enforces payload invariants. Nothing outside this
//! module mentions the wire names.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  roster::{ActionStyle, Event, Person, RosterPayload, Tier},
};

// ─── Wire shape ──────────────────────────────────────────────────────────────

/// Body of a `/now` response: `{ "support": [...], "events": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireRoster {
  #[serde(default)]
  pub support: Vec<WireTier>,
  #[serde(default)]
  pub events:  Vec<WireEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireTier {
  pub title:          String,
  #[serde(default)]
  pub subheader:      String,
  #[serde(rename = "onCall")]
  pub on_call:        WireOnCall,
  #[serde(rename = "buttonText", default)]
  pub button_text:    String,
  #[serde(rename = "buttonVariant", default)]
  pub button_variant: ActionStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireOnCall {
  pub name:            String,
  pub github:          String,
  /// Emitted by the server; viewers ignore it.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start:           Option<String>,
  pub end:             String,
  #[serde(default)]
  pub questions:       String,
  #[serde(rename = "questionsSlack", default)]
  pub questions_slack: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireEvent {
  pub title:          String,
  #[serde(default)]
  pub subheader:      String,
  pub wg:             String,
  pub when:           String,
  #[serde(rename = "buttonText", default)]
  pub button_text:    String,
  #[serde(rename = "buttonVariant", default)]
  pub button_variant: ActionStyle,
}

// ─── Decode ──────────────────────────────────────────────────────────────────

/// Decode a `/now` response body into a validated payload.
pub fn decode(body: &[u8]) -> Result<RosterPayload> {
  let wire: WireRoster = serde_json::from_slice(body)?;
  RosterPayload::try_from(wire)
}

impl TryFrom<WireRoster> for RosterPayload {
  type Error = Error;

  fn try_from(wire: WireRoster) -> Result<Self> {
    let mut seen = HashSet::new();
    for tier in &wire.support {
      if !seen.insert(tier.title.clone()) {
        return Err(Error::DuplicateTierTitle(tier.title.clone()));
      }
    }

    Ok(RosterPayload {
      tiers:  wire.support.into_iter().map(Tier::from).collect(),
      events: wire.events.into_iter().map(Event::from).collect(),
    })
  }
}

impl From<WireTier> for Tier {
  fn from(wire: WireTier) -> Self {
    Tier {
      title:        wire.title,
      subheader:    wire.subheader,
      on_call:      Person {
        display_name:  wire.on_call.name,
        profile_url:   wire.on_call.github,
        end_date:      wire.on_call.end,
        contact_label: wire.on_call.questions,
        contact_url:   wire.on_call.questions_slack,
      },
      action_label: wire.button_text,
      action_style: wire.button_variant,
    }
  }
}

impl From<WireEvent> for Event {
  fn from(wire: WireEvent) -> Self {
    Event {
      title:         wire.title,
      subheader:     wire.subheader,
      working_group: wire.wg,
      when:          wire.when,
      action_label:  wire.button_text,
      action_style:  wire.button_variant,
    }
  }
}
