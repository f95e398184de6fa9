//! NewsItem — short announcements on the home page ticker.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
  pub id:    EntityId,
  pub title: String,
  pub date:  String,
  #[serde(rename = "type")]
  pub kind:  String,
}

/// Input to `add_news_item`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsItem {
  pub title: String,
  pub date:  String,
  #[serde(rename = "type")]
  pub kind:  String,
}

impl NewNewsItem {
  pub fn into_news_item(self, id: EntityId) -> NewsItem {
    NewsItem { id, title: self.title, date: self.date, kind: self.kind }
  }
}

/// Partial update for [`NewsItem`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItemPatch {
  pub title: Option<String>,
  pub date:  Option<String>,
  #[serde(rename = "type")]
  pub kind:  Option<String>,
}

impl NewsItemPatch {
  /// Shallow-merge this patch into `item`.
  pub fn apply(self, item: &mut NewsItem) {
    if let Some(v) = self.title { item.title = v; }
    if let Some(v) = self.date { item.date = v; }
    if let Some(v) = self.kind { item.kind = v; }
  }
}
