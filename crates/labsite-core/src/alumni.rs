//! Alumni — graduated lab members and where they landed.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
  pub id:              EntityId,
  pub name:            String,
  pub graduation_year: String,
  pub degree:          String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_position: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub company:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image:            Option<String>,
  #[serde(default)]
  pub achievements:     Vec<String>,
}

/// Input to `add_alumni`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlumni {
  pub name:            String,
  pub graduation_year: String,
  pub degree:          String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_position: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub company:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image:            Option<String>,
  #[serde(default)]
  pub achievements:     Vec<String>,
}

impl NewAlumni {
  pub fn into_alumni(self, id: EntityId) -> Alumni {
    Alumni {
      id,
      name: self.name,
      graduation_year: self.graduation_year,
      degree: self.degree,
      current_position: self.current_position,
      company: self.company,
      location: self.location,
      image: self.image,
      achievements: self.achievements,
    }
  }
}

/// Partial update for [`Alumni`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniPatch {
  pub name:            Option<String>,
  pub graduation_year: Option<String>,
  pub degree:          Option<String>,
  pub current_position: Option<String>,
  pub company:          Option<String>,
  pub location:         Option<String>,
  pub image:            Option<String>,
  pub achievements:     Option<Vec<String>>,
}

impl AlumniPatch {
  /// Shallow-merge this patch into `alumni`.
  pub fn apply(self, alumni: &mut Alumni) {
    if let Some(v) = self.name { alumni.name = v; }
    if let Some(v) = self.graduation_year { alumni.graduation_year = v; }
    if let Some(v) = self.degree { alumni.degree = v; }
    if let Some(v) = self.current_position { alumni.current_position = Some(v); }
    if let Some(v) = self.company { alumni.company = Some(v); }
    if let Some(v) = self.location { alumni.location = Some(v); }
    if let Some(v) = self.image { alumni.image = Some(v); }
    if let Some(v) = self.achievements { alumni.achievements = v; }
  }
}
