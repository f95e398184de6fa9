//! Publication — journal papers, conference papers, book chapters.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

/// Discriminates rendering and citation format downstream; the store only
/// filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationKind {
  Journal,
  Conference,
  BookChapter,
  Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
  pub id:       EntityId,
  pub title:    String,
  pub authors:  Vec<String>,
  pub journal:  String,
  pub year:     u16,
  #[serde(rename = "type")]
  pub kind:     PublicationKind,
  pub doi:      String,
  pub featured: bool,
  #[serde(rename = "abstract")]
  pub abstract_text: String,
  pub paper_url:     String,
  pub code_url:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub venue:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pages:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub volume:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issue:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub publisher: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub isbn:      Option<String>,
}

/// Input to `add_publication`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublication {
  pub title:    String,
  pub authors:  Vec<String>,
  pub journal:  String,
  pub year:     u16,
  #[serde(rename = "type")]
  pub kind:     PublicationKind,
  pub doi:      String,
  pub featured: bool,
  #[serde(rename = "abstract")]
  pub abstract_text: String,
  pub paper_url:     String,
  pub code_url:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub venue:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pages:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub volume:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issue:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub publisher: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub isbn:      Option<String>,
}

impl NewPublication {
  pub fn into_publication(self, id: EntityId) -> Publication {
    Publication {
      id,
      title: self.title,
      authors: self.authors,
      journal: self.journal,
      year: self.year,
      kind: self.kind,
      doi: self.doi,
      featured: self.featured,
      abstract_text: self.abstract_text,
      paper_url: self.paper_url,
      code_url: self.code_url,
      venue: self.venue,
      pages: self.pages,
      volume: self.volume,
      issue: self.issue,
      publisher: self.publisher,
      isbn: self.isbn,
    }
  }
}

/// Partial update for [`Publication`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationPatch {
  pub title:    Option<String>,
  pub authors:  Option<Vec<String>>,
  pub journal:  Option<String>,
  pub year:     Option<u16>,
  #[serde(rename = "type")]
  pub kind:     Option<PublicationKind>,
  pub doi:      Option<String>,
  pub featured: Option<bool>,
  #[serde(rename = "abstract")]
  pub abstract_text: Option<String>,
  pub paper_url:     Option<String>,
  pub code_url:      Option<String>,
  pub venue:     Option<String>,
  pub pages:     Option<String>,
  pub volume:    Option<String>,
  pub issue:     Option<String>,
  pub publisher: Option<String>,
  pub isbn:      Option<String>,
}

impl PublicationPatch {
  /// Shallow-merge this patch into `publication`.
  pub fn apply(self, publication: &mut Publication) {
    if let Some(v) = self.title { publication.title = v; }
    if let Some(v) = self.authors { publication.authors = v; }
    if let Some(v) = self.journal { publication.journal = v; }
    if let Some(v) = self.year { publication.year = v; }
    if let Some(v) = self.kind { publication.kind = v; }
    if let Some(v) = self.doi { publication.doi = v; }
    if let Some(v) = self.featured { publication.featured = v; }
    if let Some(v) = self.abstract_text { publication.abstract_text = v; }
    if let Some(v) = self.paper_url { publication.paper_url = v; }
    if let Some(v) = self.code_url { publication.code_url = v; }
    if let Some(v) = self.venue { publication.venue = Some(v); }
    if let Some(v) = self.pages { publication.pages = Some(v); }
    if let Some(v) = self.volume { publication.volume = Some(v); }
    if let Some(v) = self.issue { publication.issue = Some(v); }
    if let Some(v) = self.publisher { publication.publisher = Some(v); }
    if let Some(v) = self.isbn { publication.isbn = Some(v); }
  }
}
