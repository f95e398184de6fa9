//! Instrument — lab equipment listed on the facilities page.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
  pub id:           EntityId,
  pub name:         String,
  pub category:     String,
  pub image:        String,
  pub description:  String,
  pub specs:        Vec<String>,
  pub applications: Vec<String>,
  pub details:      String,
}

/// Input to `add_instrument`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstrument {
  pub name:         String,
  pub category:     String,
  pub image:        String,
  pub description:  String,
  pub specs:        Vec<String>,
  pub applications: Vec<String>,
  pub details:      String,
}

impl NewInstrument {
  pub fn into_instrument(self, id: EntityId) -> Instrument {
    Instrument {
      id,
      name: self.name,
      category: self.category,
      image: self.image,
      description: self.description,
      specs: self.specs,
      applications: self.applications,
      details: self.details,
    }
  }
}

/// Partial update for [`Instrument`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentPatch {
  pub name:         Option<String>,
  pub category:     Option<String>,
  pub image:        Option<String>,
  pub description:  Option<String>,
  pub specs:        Option<Vec<String>>,
  pub applications: Option<Vec<String>>,
  pub details:      Option<String>,
}

impl InstrumentPatch {
  /// Shallow-merge this patch into `instrument`.
  pub fn apply(self, instrument: &mut Instrument) {
    if let Some(v) = self.name { instrument.name = v; }
    if let Some(v) = self.category { instrument.category = v; }
    if let Some(v) = self.image { instrument.image = v; }
    if let Some(v) = self.description { instrument.description = v; }
    if let Some(v) = self.specs { instrument.specs = v; }
    if let Some(v) = self.applications { instrument.applications = v; }
    if let Some(v) = self.details { instrument.details = v; }
  }
}
