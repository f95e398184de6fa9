//! Person — faculty and research-scholar profiles shown on the team page.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

/// Partition of lab members into the two public roster sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonCategory {
  Faculty,
  ResearchScholar,
}

/// A lab member.
///
/// `image` is an opaque reference into the media subsystem; the store never
/// inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:        EntityId,
  pub name:      String,
  pub role:      String,
  pub category:  PersonCategory,
  pub email:     String,
  pub interests: Vec<String>,
  pub bio:       String,
  pub image:     String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub year_of_joining:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expected_completion: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub iit_profile_link:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:               Option<String>,
}

/// Input to `add_person` — everything except the store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
  pub name:      String,
  pub role:      String,
  pub category:  PersonCategory,
  pub email:     String,
  pub interests: Vec<String>,
  pub bio:       String,
  pub image:     String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub year_of_joining:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expected_completion: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub iit_profile_link:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:               Option<String>,
}

impl NewPerson {
  pub fn into_person(self, id: EntityId) -> Person {
    Person {
      id,
      name: self.name,
      role: self.role,
      category: self.category,
      email: self.email,
      interests: self.interests,
      bio: self.bio,
      image: self.image,
      year_of_joining: self.year_of_joining,
      expected_completion: self.expected_completion,
      iit_profile_link: self.iit_profile_link,
      phone: self.phone,
    }
  }
}

/// Partial update for [`Person`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
  pub name:      Option<String>,
  pub role:      Option<String>,
  pub category:  Option<PersonCategory>,
  pub email:     Option<String>,
  pub interests: Option<Vec<String>>,
  pub bio:       Option<String>,
  pub image:     Option<String>,
  pub year_of_joining:     Option<String>,
  pub expected_completion: Option<String>,
  pub iit_profile_link:    Option<String>,
  pub phone:               Option<String>,
}

impl PersonPatch {
  /// Shallow-merge this patch into `person`.
  pub fn apply(self, person: &mut Person) {
    if let Some(v) = self.name { person.name = v; }
    if let Some(v) = self.role { person.role = v; }
    if let Some(v) = self.category { person.category = v; }
    if let Some(v) = self.email { person.email = v; }
    if let Some(v) = self.interests { person.interests = v; }
    if let Some(v) = self.bio { person.bio = v; }
    if let Some(v) = self.image { person.image = v; }
    if let Some(v) = self.year_of_joining { person.year_of_joining = Some(v); }
    if let Some(v) = self.expected_completion { person.expected_completion = Some(v); }
    if let Some(v) = self.iit_profile_link { person.iit_profile_link = Some(v); }
    if let Some(v) = self.phone { person.phone = Some(v); }
  }
}
