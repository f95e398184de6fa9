//! Achievement — awards, grants, and recognitions.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

/// An award or recognition. `icon` and `color` are presentation keys owned by
/// the rendering layer, stored here as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
  pub id:          EntityId,
  pub year:        String,
  #[serde(rename = "type")]
  pub kind:        String,
  pub title:       String,
  pub description: String,
  pub recipient:   String,
  pub icon:        String,
  pub color:       String,
}

/// Input to `add_achievement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
  pub year:        String,
  #[serde(rename = "type")]
  pub kind:        String,
  pub title:       String,
  pub description: String,
  pub recipient:   String,
  pub icon:        String,
  pub color:       String,
}

impl NewAchievement {
  pub fn into_achievement(self, id: EntityId) -> Achievement {
    Achievement {
      id,
      year: self.year,
      kind: self.kind,
      title: self.title,
      description: self.description,
      recipient: self.recipient,
      icon: self.icon,
      color: self.color,
    }
  }
}

/// Partial update for [`Achievement`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPatch {
  pub year:        Option<String>,
  #[serde(rename = "type")]
  pub kind:        Option<String>,
  pub title:       Option<String>,
  pub description: Option<String>,
  pub recipient:   Option<String>,
  pub icon:        Option<String>,
  pub color:       Option<String>,
}

impl AchievementPatch {
  /// Shallow-merge this patch into `achievement`.
  pub fn apply(self, achievement: &mut Achievement) {
    if let Some(v) = self.year { achievement.year = v; }
    if let Some(v) = self.kind { achievement.kind = v; }
    if let Some(v) = self.title { achievement.title = v; }
    if let Some(v) = self.description { achievement.description = v; }
    if let Some(v) = self.recipient { achievement.recipient = v; }
    if let Some(v) = self.icon { achievement.icon = v; }
    if let Some(v) = self.color { achievement.color = v; }
  }
}
