//! Tests for `ContentStore` against the in-memory backend.

use labsite_core::{
  MemoryStore, Snapshot, SnapshotStore,
  content::{AboutContentPatch, History},
  person::{NewPerson, PersonCategory, PersonPatch},
  publication::{NewPublication, PublicationKind},
};
use thiserror::Error;

use crate::{ContentStore, SaveOutcome};

async fn store() -> ContentStore<MemoryStore> {
  ContentStore::open(MemoryStore::new()).await
}

fn new_person(name: &str) -> NewPerson {
  NewPerson {
    name:      name.into(),
    role:      "PhD Scholar".into(),
    category:  PersonCategory::ResearchScholar,
    email:     format!("{}@lab.example.edu", name.to_lowercase()),
    interests: vec!["batteries".into()],
    bio:       String::new(),
    image:     String::new(),
    year_of_joining: None,
    expected_completion: None,
    iit_profile_link: None,
    phone: None,
  }
}

fn new_publication(title: &str, kind: PublicationKind) -> NewPublication {
  NewPublication {
    title:    title.into(),
    authors:  vec!["A".into()],
    journal:  "J".into(),
    year:     2025,
    kind,
    doi:      String::new(),
    featured: false,
    abstract_text: String::new(),
    paper_url: String::new(),
    code_url:  String::new(),
    venue:     None,
    pages:     None,
    volume:    None,
    issue:     None,
    publisher: None,
    isbn:      None,
  }
}

// ─── Backend that always fails ───────────────────────────────────────────────

#[derive(Debug, Error)]
#[error("backing store unavailable")]
struct Unavailable;

struct BrokenStore;

impl SnapshotStore for BrokenStore {
  type Error = Unavailable;

  async fn load(&self) -> Result<Option<Snapshot>, Unavailable> {
    Err(Unavailable)
  }

  async fn save(&self, _snapshot: &Snapshot) -> Result<(), Unavailable> {
    Err(Unavailable)
  }
}

// ─── Startup & seed fallback ─────────────────────────────────────────────────

#[tokio::test]
async fn empty_backend_falls_back_to_seed() {
  let s = store().await;
  assert_eq!(s.snapshot(), Snapshot::seed());
  assert!(!s.people().is_empty());
}

#[tokio::test]
async fn failed_load_falls_back_to_seed() {
  let s = ContentStore::open(BrokenStore).await;
  assert_eq!(s.snapshot(), Snapshot::seed());
}

#[tokio::test]
async fn open_restores_persisted_state() {
  let backend = MemoryStore::new();
  let s = ContentStore::open(backend.clone()).await;
  let added = s.add_person(new_person("Tara"));
  s.flush().await;

  let reopened = ContentStore::open(backend).await;
  let people = reopened.people();
  assert_eq!(people.len(), Snapshot::seed().people.len() + 1);
  assert_eq!(people.last().unwrap(), &added);
}

// ─── Id assignment ───────────────────────────────────────────────────────────

#[tokio::test]
async fn ids_are_pairwise_distinct_across_adds() {
  let s = store().await;
  let mut ids: Vec<_> = s.people().iter().map(|p| p.id).collect();
  for i in 0..20 {
    ids.push(s.add_person(new_person(&format!("P{i}"))).id);
  }
  // Adds to other collections share the counter and must not collide either.
  ids.push(s.add_publication(new_publication("X", PublicationKind::Journal)).id);

  let mut sorted = ids.clone();
  sorted.sort_unstable();
  sorted.dedup();
  assert_eq!(sorted.len(), ids.len());
}

#[tokio::test]
async fn id_counter_resumes_past_persisted_ids() {
  let backend = MemoryStore::new();
  let s = ContentStore::open(backend.clone()).await;
  let first = s.add_person(new_person("A"));
  s.flush().await;

  let reopened = ContentStore::open(backend).await;
  let second = reopened.add_person(new_person("B"));
  assert!(second.id > first.id);
}

// ─── Update semantics ────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_patch_leaves_record_unchanged() {
  let s = store().await;
  let person = s.add_person(new_person("Ira"));
  s.update_person(person.id, PersonPatch::default());
  let found = s.people().into_iter().find(|p| p.id == person.id).unwrap();
  assert_eq!(found, person);
}

#[tokio::test]
async fn patch_merges_supplied_fields_and_preserves_the_rest() {
  let s = store().await;
  let person = s.add_person(new_person("Ira"));
  s.update_person(person.id, PersonPatch {
    role: Some("Postdoc".into()),
    phone: Some("+91 11 2659 0003".into()),
    ..Default::default()
  });

  let found = s.people().into_iter().find(|p| p.id == person.id).unwrap();
  assert_eq!(found.role, "Postdoc");
  assert_eq!(found.phone.as_deref(), Some("+91 11 2659 0003"));
  assert_eq!(found.name, person.name);
  assert_eq!(found.email, person.email);
  assert_eq!(found.id, person.id);
}

#[tokio::test]
async fn update_keeps_record_position() {
  let s = store().await;
  let a = s.add_person(new_person("A"));
  let b = s.add_person(new_person("B"));
  let c = s.add_person(new_person("C"));

  s.update_person(b.id, PersonPatch { bio: Some("updated".into()), ..Default::default() });

  let ids: Vec<_> = s.people().iter().map(|p| p.id).collect();
  let pos = |id| ids.iter().position(|&x| x == id).unwrap();
  assert!(pos(a.id) < pos(b.id) && pos(b.id) < pos(c.id));
}

#[tokio::test]
async fn update_missing_id_is_a_noop() {
  let s = store().await;
  let before = s.snapshot();
  s.update_person(9999, PersonPatch { name: Some("Ghost".into()), ..Default::default() });
  assert_eq!(s.snapshot(), before);
}

// ─── Delete semantics ────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_exactly_one_and_keeps_order() {
  let s = store().await;
  let a = s.add_person(new_person("A"));
  let b = s.add_person(new_person("B"));
  let c = s.add_person(new_person("C"));
  let before = s.people().len();

  s.delete_person(b.id);

  let people = s.people();
  assert_eq!(people.len(), before - 1);
  assert!(people.iter().all(|p| p.id != b.id));
  let pos = |id| people.iter().position(|p| p.id == id).unwrap();
  assert!(pos(a.id) < pos(c.id));
}

#[tokio::test]
async fn delete_missing_id_is_a_noop() {
  let s = store().await;
  let before = s.snapshot();
  s.delete_person(9999);
  assert_eq!(s.snapshot(), before);
}

// ─── Scenarios from the data model ───────────────────────────────────────────

#[tokio::test]
async fn add_publication_appends_to_seed() {
  let s = store().await;
  let seed_len = Snapshot::seed().publications.len();

  s.add_publication(new_publication("X", PublicationKind::Journal));

  let publications = s.publications();
  assert_eq!(publications.len(), seed_len + 1);
  assert_eq!(publications.last().unwrap().title, "X");
}

#[tokio::test]
async fn filter_publications_by_kind_preserves_order() {
  let s = store().await;
  let c1 = s.add_publication(new_publication("C1", PublicationKind::Conference));
  s.add_publication(new_publication("J1", PublicationKind::Journal));
  let c2 = s.add_publication(new_publication("C2", PublicationKind::Conference));

  let conferences = s.publications_by_kind(PublicationKind::Conference);
  assert!(conferences.iter().all(|p| p.kind == PublicationKind::Conference));
  let pos = |id| conferences.iter().position(|p| p.id == id).unwrap();
  assert!(pos(c1.id) < pos(c2.id));
  // Every conference publication in the store is present.
  let total = s
    .publications()
    .iter()
    .filter(|p| p.kind == PublicationKind::Conference)
    .count();
  assert_eq!(conferences.len(), total);
}

#[tokio::test]
async fn about_singleton_merges_and_always_exists() {
  let s = store().await;
  let before = s.about_content();
  let history = History {
    title:      "New".into(),
    content:    "C".into(),
    start_year: "2020".into(),
  };

  s.update_about_content(AboutContentPatch {
    history: Some(history.clone()),
    ..Default::default()
  });

  let about = s.about_content();
  assert_eq!(about.history, history);
  assert_eq!(about.timeline, before.timeline);
  assert_eq!(about.activities, before.activities);
  assert_eq!(about.gallery, before.gallery);
}

// ─── Subscription ────────────────────────────────────────────────────────────

#[tokio::test]
async fn subscribers_observe_mutations() {
  let s = store().await;
  let mut rx = s.subscribe();
  rx.borrow_and_update();

  let added = s.add_person(new_person("Sub"));

  rx.changed().await.unwrap();
  let seen = rx.borrow_and_update().clone();
  assert_eq!(seen.people.last().unwrap(), &added);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_mutators_never_lose_acknowledged_writes() {
  let backend = MemoryStore::new();
  let s = ContentStore::open(backend.clone()).await;
  let seed_len = s.people().len();

  let mut handles = Vec::new();
  for t in 0..4 {
    let s = s.clone();
    handles.push(tokio::spawn(async move {
      for i in 0..25 {
        s.add_person(new_person(&format!("T{t}-{i}")));
      }
    }));
  }
  for handle in handles {
    handle.await.unwrap();
  }
  s.flush().await;

  // The durable snapshot matches in-memory state exactly; no add made
  // before flush may be missing from it.
  let persisted = backend.load().await.unwrap().unwrap();
  assert_eq!(persisted, s.snapshot());
  assert_eq!(persisted.people.len(), seed_len + 100);
}

#[tokio::test]
async fn clones_share_state() {
  let s = store().await;
  let other = s.clone();
  let added = other.add_person(new_person("Shared"));
  assert!(s.people().iter().any(|p| p.id == added.id));
}

// ─── Persistence behavior ────────────────────────────────────────────────────

#[tokio::test]
async fn round_trip_preserves_every_field_shape() {
  let s = store().await;
  let mut publication = new_publication("Full", PublicationKind::BookChapter);
  publication.venue = Some("V".into());
  publication.isbn = Some("978".into());
  s.add_publication(publication);
  let written = s.snapshot();
  s.flush().await;

  let loaded = s.backend().load().await.unwrap().unwrap();
  assert_eq!(loaded, written);
}

#[tokio::test]
async fn save_failure_is_reported_and_state_survives() {
  let s = ContentStore::open(BrokenStore).await;
  let added = s.add_person(new_person("Kept"));
  s.flush().await;

  assert!(s.save_outcomes().borrow().is_failed());
  match &*s.save_outcomes().borrow() {
    SaveOutcome::Failed { error, .. } => {
      assert!(error.contains("unavailable"));
    }
    other => panic!("expected failure outcome, got {other:?}"),
  }
  // In-memory state is still authoritative.
  assert!(s.people().iter().any(|p| p.id == added.id));
}

#[tokio::test]
async fn successful_save_is_reported() {
  let s = store().await;
  s.add_person(new_person("Saved"));
  s.flush().await;
  assert!(matches!(&*s.save_outcomes().borrow(), SaveOutcome::Saved { .. }));
}

// ─── Whole-snapshot replacement ──────────────────────────────────────────────

#[tokio::test]
async fn replace_snapshot_reseeds_id_counter() {
  let s = store().await;
  let mut snapshot = Snapshot::default();
  snapshot.people.push(new_person("Imported").into_person(500));
  s.replace_snapshot(snapshot);

  assert_eq!(s.people().len(), 1);
  let next = s.add_person(new_person("After"));
  assert!(next.id > 500);
}
