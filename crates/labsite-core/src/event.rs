//! Event — seminars, workshops, and lab events.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  pub id:          EntityId,
  pub title:       String,
  pub description: String,
  pub date:        String,
  pub time:        String,
  pub location:    String,
  pub category:    String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub organizer:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub registration_link: Option<String>,
}

/// Input to `add_event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
  pub title:       String,
  pub description: String,
  pub date:        String,
  pub time:        String,
  pub location:    String,
  pub category:    String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub organizer:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub registration_link: Option<String>,
}

impl NewEvent {
  pub fn into_event(self, id: EntityId) -> Event {
    Event {
      id,
      title: self.title,
      description: self.description,
      date: self.date,
      time: self.time,
      location: self.location,
      category: self.category,
      organizer: self.organizer,
      registration_link: self.registration_link,
    }
  }
}

/// Partial update for [`Event`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub date:        Option<String>,
  pub time:        Option<String>,
  pub location:    Option<String>,
  pub category:    Option<String>,
  pub organizer:         Option<String>,
  pub registration_link: Option<String>,
}

impl EventPatch {
  /// Shallow-merge this patch into `event`.
  pub fn apply(self, event: &mut Event) {
    if let Some(v) = self.title { event.title = v; }
    if let Some(v) = self.description { event.description = v; }
    if let Some(v) = self.date { event.date = v; }
    if let Some(v) = self.time { event.time = v; }
    if let Some(v) = self.location { event.location = v; }
    if let Some(v) = self.category { event.category = v; }
    if let Some(v) = self.organizer { event.organizer = Some(v); }
    if let Some(v) = self.registration_link { event.registration_link = Some(v); }
  }
}
