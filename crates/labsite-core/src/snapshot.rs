//! Snapshot — the complete serializable state of every collection and
//! singleton at a point in time.
//!
//! This is the unit of persistence: adapters always load and save whole
//! snapshots, never diffs. The JSON shape uses one camelCase key per
//! collection so a stored snapshot is directly consumable by the website.

use serde::{Deserialize, Serialize};

use crate::{
  achievement::Achievement,
  alumni::Alumni,
  content::{AboutContent, ContactInfo, HomeContent, JoinUsContent},
  course::Course,
  event::Event,
  instrument::Instrument,
  news::NewsItem,
  person::Person,
  publication::Publication,
  record::EntityId,
};

/// All collections and singletons. Every field defaults so a partially
/// populated stored snapshot still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
  #[serde(default)]
  pub people:       Vec<Person>,
  #[serde(default)]
  pub publications: Vec<Publication>,
  #[serde(default)]
  pub achievements: Vec<Achievement>,
  #[serde(default)]
  pub instruments:  Vec<Instrument>,
  #[serde(default)]
  pub courses:      Vec<Course>,
  #[serde(default)]
  pub home_content: HomeContent,
  #[serde(default)]
  pub news:         Vec<NewsItem>,
  #[serde(default)]
  pub contact_info: ContactInfo,
  #[serde(default)]
  pub events:       Vec<Event>,
  #[serde(default)]
  pub alumni:       Vec<Alumni>,
  #[serde(default)]
  pub about_content:   AboutContent,
  #[serde(default)]
  pub join_us_content: JoinUsContent,
}

impl Snapshot {
  /// The default dataset used when no persisted snapshot exists.
  pub fn seed() -> Self { crate::seed::snapshot() }

  /// The highest id present in any collection; `0` when all are empty.
  /// Stores seed their id counter from this.
  pub fn max_id(&self) -> EntityId {
    let ids = self
      .people
      .iter()
      .map(|r| r.id)
      .chain(self.publications.iter().map(|r| r.id))
      .chain(self.achievements.iter().map(|r| r.id))
      .chain(self.instruments.iter().map(|r| r.id))
      .chain(self.courses.iter().map(|r| r.id))
      .chain(self.news.iter().map(|r| r.id))
      .chain(self.events.iter().map(|r| r.id))
      .chain(self.alumni.iter().map(|r| r.id));
    ids.max().unwrap_or(0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    content::{AboutContentPatch, History},
    person::{PersonCategory, PersonPatch},
  };

  #[test]
  fn snapshot_keys_are_camel_case() {
    let json = serde_json::to_value(Snapshot::seed()).unwrap();
    let obj = json.as_object().unwrap();
    for key in [
      "people", "publications", "achievements", "instruments", "courses",
      "homeContent", "news", "contactInfo", "events", "alumni",
      "aboutContent", "joinUsContent",
    ] {
      assert!(obj.contains_key(key), "missing snapshot key {key}");
    }
    assert_eq!(obj.len(), 12);
  }

  #[test]
  fn snapshot_serde_round_trip() {
    let seed = Snapshot::seed();
    let json = serde_json::to_string(&seed).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seed);
  }

  #[test]
  fn partial_snapshot_deserializes_with_defaults() {
    let snapshot: Snapshot =
      serde_json::from_str(r#"{"people": []}"#).unwrap();
    assert!(snapshot.publications.is_empty());
    assert_eq!(snapshot.about_content, AboutContent::default());
  }

  #[test]
  fn max_id_spans_all_collections() {
    let seed = Snapshot::seed();
    let max = seed.max_id();
    assert!(seed.people.iter().all(|p| p.id <= max));
    assert!(seed.publications.iter().all(|p| p.id <= max));
    assert_eq!(Snapshot::default().max_id(), 0);
  }

  #[test]
  fn empty_person_patch_is_identity() {
    let mut person = Snapshot::seed().people.remove(0);
    let before = person.clone();
    PersonPatch::default().apply(&mut person);
    assert_eq!(person, before);
  }

  #[test]
  fn person_patch_merges_only_supplied_fields() {
    let mut person = Snapshot::seed().people.remove(0);
    let before = person.clone();
    let patch = PersonPatch {
      email: Some("new@lab.example.edu".into()),
      category: Some(PersonCategory::Faculty),
      ..Default::default()
    };
    patch.apply(&mut person);
    assert_eq!(person.email, "new@lab.example.edu");
    assert_eq!(person.category, PersonCategory::Faculty);
    assert_eq!(person.name, before.name);
    assert_eq!(person.interests, before.interests);
    assert_eq!(person.id, before.id);
  }

  #[test]
  fn about_patch_replaces_only_history() {
    let mut about = Snapshot::seed().about_content;
    let before = about.clone();
    let history = History {
      title:      "New".into(),
      content:    "C".into(),
      start_year: "2020".into(),
    };
    AboutContentPatch { history: Some(history.clone()), ..Default::default() }
      .apply(&mut about);
    assert_eq!(about.history, history);
    assert_eq!(about.timeline, before.timeline);
    assert_eq!(about.activities, before.activities);
    assert_eq!(about.gallery, before.gallery);
  }

  #[test]
  fn publication_type_field_serializes_as_type() {
    let publication = &Snapshot::seed().publications[0];
    let json = serde_json::to_value(publication).unwrap();
    assert!(json.get("type").is_some());
    assert!(json.get("abstract").is_some());
    assert!(json.get("paperUrl").is_some());
  }
}
