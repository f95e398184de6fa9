//! Singleton content objects — exactly one instance of each exists in a
//! snapshot, and they support merge-update only (never add/delete).
//!
//! Merge granularity is the top-level field: patching `history` replaces the
//! whole `history` object, patching `timeline` replaces the whole list.

use serde::{Deserialize, Serialize};

// ─── About page ──────────────────────────────────────────────────────────────

/// The lab history blurb at the top of the about page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
  pub title:      String,
  pub content:    String,
  pub start_year: String,
}

/// One milestone on the about-page timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
  pub year:        String,
  pub title:       String,
  pub description: String,
}

/// A research activity card. `icon` is a presentation key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
  pub title:       String,
  pub description: String,
  pub icon:        String,
}

/// One image in the about-page gallery; `image` is an opaque media reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
  pub image:   String,
  pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
  pub history:    History,
  pub timeline:   Vec<TimelineEntry>,
  pub activities: Vec<Activity>,
  pub gallery:    Vec<GalleryImage>,
}

/// Merge-update for [`AboutContent`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContentPatch {
  pub history:    Option<History>,
  pub timeline:   Option<Vec<TimelineEntry>>,
  pub activities: Option<Vec<Activity>>,
  pub gallery:    Option<Vec<GalleryImage>>,
}

impl AboutContentPatch {
  pub fn apply(self, about: &mut AboutContent) {
    if let Some(v) = self.history { about.history = v; }
    if let Some(v) = self.timeline { about.timeline = v; }
    if let Some(v) = self.activities { about.activities = v; }
    if let Some(v) = self.gallery { about.gallery = v; }
  }
}

// ─── Join-us page ────────────────────────────────────────────────────────────

/// An open position or opportunity listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
  pub title:       String,
  #[serde(rename = "type")]
  pub kind:        String,
  pub description: String,
  pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
  pub question: String,
  pub answer:   String,
}

/// Lab contact details; also used as the `contactInfo` snapshot singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
  pub email:   String,
  pub phone:   String,
  pub address: String,
}

/// Merge-update for [`ContactInfo`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoPatch {
  pub email:   Option<String>,
  pub phone:   Option<String>,
  pub address: Option<String>,
}

impl ContactInfoPatch {
  pub fn apply(self, contact: &mut ContactInfo) {
    if let Some(v) = self.email { contact.email = v; }
    if let Some(v) = self.phone { contact.phone = v; }
    if let Some(v) = self.address { contact.address = v; }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinUsContent {
  pub opportunities: Vec<Opportunity>,
  pub contact:       ContactInfo,
  pub faqs:          Vec<Faq>,
}

/// Merge-update for [`JoinUsContent`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinUsContentPatch {
  pub opportunities: Option<Vec<Opportunity>>,
  pub contact:       Option<ContactInfo>,
  pub faqs:          Option<Vec<Faq>>,
}

impl JoinUsContentPatch {
  pub fn apply(self, join_us: &mut JoinUsContent) {
    if let Some(v) = self.opportunities { join_us.opportunities = v; }
    if let Some(v) = self.contact { join_us.contact = v; }
    if let Some(v) = self.faqs { join_us.faqs = v; }
  }
}

// ─── Home page ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
  pub hero_title:       String,
  pub hero_subtitle:    String,
  /// Opaque media reference for the hero background.
  pub background_image: String,
  pub announcement:     String,
}

/// Merge-update for [`HomeContent`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContentPatch {
  pub hero_title:       Option<String>,
  pub hero_subtitle:    Option<String>,
  pub background_image: Option<String>,
  pub announcement:     Option<String>,
}

impl HomeContentPatch {
  pub fn apply(self, home: &mut HomeContent) {
    if let Some(v) = self.hero_title { home.hero_title = v; }
    if let Some(v) = self.hero_subtitle { home.hero_subtitle = v; }
    if let Some(v) = self.background_image { home.background_image = v; }
    if let Some(v) = self.announcement { home.announcement = v; }
  }
}
