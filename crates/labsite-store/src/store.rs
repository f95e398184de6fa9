//! [`ContentStore`] — the shared handle over all entity collections.

use std::sync::{Arc, Mutex, MutexGuard};

use labsite_core::{
  EntityId, Snapshot, SnapshotStore,
  achievement::{Achievement, AchievementPatch, NewAchievement},
  alumni::{Alumni, AlumniPatch, NewAlumni},
  content::{
    AboutContent, AboutContentPatch, ContactInfo, ContactInfoPatch,
    HomeContent, HomeContentPatch, JoinUsContent, JoinUsContentPatch,
  },
  course::{Course, CoursePatch, NewCourse},
  event::{Event, EventPatch, NewEvent},
  instrument::{Instrument, InstrumentPatch, NewInstrument},
  news::{NewNewsItem, NewsItem, NewsItemPatch},
  person::{NewPerson, Person, PersonPatch},
  publication::{NewPublication, Publication, PublicationKind, PublicationPatch},
};
use tokio::sync::{mpsc, oneshot, watch};

use crate::persist::{self, PersistCmd, SaveOutcome};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The content store handle.
///
/// Cloning is cheap — all clones share the same state, so a mutation through
/// one clone is immediately visible through every other. Ids are assigned
/// from a store-owned monotonic counter seeded past the highest id in the
/// loaded snapshot.
///
/// Mutators are synchronous and infallible: the in-memory update completes
/// before the call returns, and durability is delegated to a background
/// task whose results are observable via [`ContentStore::save_outcomes`].
pub struct ContentStore<B: SnapshotStore> {
  inner: Arc<Inner<B>>,
}

impl<B: SnapshotStore> Clone for ContentStore<B> {
  fn clone(&self) -> Self { Self { inner: Arc::clone(&self.inner) } }
}

struct Inner<B> {
  state:       Mutex<State>,
  snapshot_tx: watch::Sender<Snapshot>,
  persist_tx:  mpsc::UnboundedSender<PersistCmd>,
  outcome_rx:  watch::Receiver<SaveOutcome>,
  backend:     Arc<B>,
}

struct State {
  snapshot: Snapshot,
  next_id:  EntityId,
}

impl State {
  fn fresh_id(&mut self) -> EntityId {
    let id = self.next_id;
    self.next_id += 1;
    id
  }
}

impl<B: SnapshotStore + 'static> ContentStore<B> {
  /// Load the last snapshot from `backend` and start the persister task.
  ///
  /// A missing snapshot or a failed load falls back to the seed dataset, so
  /// opening never fails — the application is always renderable.
  ///
  /// Must be called from within a tokio runtime; calling it outside one is a
  /// wiring bug and panics.
  pub async fn open(backend: B) -> Self {
    let snapshot = match backend.load().await {
      Ok(Some(snapshot)) => snapshot,
      Ok(None) => {
        tracing::info!("no stored snapshot; starting from seed data");
        Snapshot::seed()
      }
      Err(e) => {
        tracing::warn!(
          error = %e,
          "failed to load snapshot; starting from seed data"
        );
        Snapshot::seed()
      }
    };

    let next_id = snapshot.max_id() + 1;
    let backend = Arc::new(backend);

    let (snapshot_tx, _) = watch::channel(snapshot.clone());
    let (outcome_tx, outcome_rx) = watch::channel(SaveOutcome::Idle);
    let (persist_tx, persist_rx) = mpsc::unbounded_channel();

    tokio::spawn(persist::run(Arc::clone(&backend), persist_rx, outcome_tx));

    Self {
      inner: Arc::new(Inner {
        state: Mutex::new(State { snapshot, next_id }),
        snapshot_tx,
        persist_tx,
        outcome_rx,
        backend,
      }),
    }
  }
}

impl<B: SnapshotStore> ContentStore<B> {
  fn lock(&self) -> MutexGuard<'_, State> {
    // A poisoned mutex means a mutator panicked mid-update; continuing
    // would publish a half-applied snapshot.
    self.inner.state.lock().expect("content store mutex poisoned")
  }

  /// Run `f` against the current state, then publish the new snapshot to
  /// subscribers and enqueue a save. Publishing happens while the state
  /// lock is still held, so snapshots reach the watch channel and the
  /// persist queue in mutation order even across threads.
  fn commit<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
    let mut state = self.lock();
    let value = f(&mut state);
    self.publish(&state.snapshot);
    value
  }

  /// Like [`Self::commit`], but skips publish and save when `f` reports
  /// that nothing changed (update/delete on a missing id).
  fn commit_if(&self, f: impl FnOnce(&mut State) -> bool) {
    let mut state = self.lock();
    if f(&mut state) {
      self.publish(&state.snapshot);
    }
  }

  // Both sends are non-blocking, so calling this under the state lock
  // never stalls a mutator.
  fn publish(&self, snapshot: &Snapshot) {
    self.inner.snapshot_tx.send_replace(snapshot.clone());
    self
      .inner
      .persist_tx
      .send(PersistCmd::Write(snapshot.clone()))
      .expect("persister task is gone");
  }

  // ── Reads ───────────────────────────────────────────────────────────────

  /// The persistence backend this store writes through.
  pub fn backend(&self) -> &B { &self.inner.backend }

  /// A point-in-time copy of the full state.
  pub fn snapshot(&self) -> Snapshot { self.lock().snapshot.clone() }

  pub fn people(&self) -> Vec<Person> { self.lock().snapshot.people.clone() }

  pub fn publications(&self) -> Vec<Publication> {
    self.lock().snapshot.publications.clone()
  }

  /// Publications of one kind, in their stored relative order.
  pub fn publications_by_kind(&self, kind: PublicationKind) -> Vec<Publication> {
    self
      .lock()
      .snapshot
      .publications
      .iter()
      .filter(|p| p.kind == kind)
      .cloned()
      .collect()
  }

  pub fn achievements(&self) -> Vec<Achievement> {
    self.lock().snapshot.achievements.clone()
  }

  pub fn instruments(&self) -> Vec<Instrument> {
    self.lock().snapshot.instruments.clone()
  }

  pub fn courses(&self) -> Vec<Course> { self.lock().snapshot.courses.clone() }

  pub fn news(&self) -> Vec<NewsItem> { self.lock().snapshot.news.clone() }

  pub fn events(&self) -> Vec<Event> { self.lock().snapshot.events.clone() }

  pub fn alumni(&self) -> Vec<Alumni> { self.lock().snapshot.alumni.clone() }

  pub fn home_content(&self) -> HomeContent {
    self.lock().snapshot.home_content.clone()
  }

  pub fn contact_info(&self) -> ContactInfo {
    self.lock().snapshot.contact_info.clone()
  }

  pub fn about_content(&self) -> AboutContent {
    self.lock().snapshot.about_content.clone()
  }

  pub fn join_us_content(&self) -> JoinUsContent {
    self.lock().snapshot.join_us_content.clone()
  }

  // ── Subscription ────────────────────────────────────────────────────────

  /// Watch the full snapshot; the receiver holds the value as of
  /// subscription time and is notified on every mutation.
  pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
    self.inner.snapshot_tx.subscribe()
  }

  /// Watch the result of the most recent background save.
  pub fn save_outcomes(&self) -> watch::Receiver<SaveOutcome> {
    self.inner.outcome_rx.clone()
  }

  /// Wait until every mutation made before this call has been handed to the
  /// backend. Used at shutdown and in tests; the UI never blocks on it.
  pub async fn flush(&self) {
    let (ack_tx, ack_rx) = oneshot::channel();
    self
      .inner
      .persist_tx
      .send(PersistCmd::Flush(ack_tx))
      .expect("persister task is gone");
    ack_rx.await.expect("persister task dropped flush ack");
  }

  /// Replace the entire state with `snapshot` (whole-snapshot import).
  /// The id counter is re-seeded past the highest imported id.
  pub fn replace_snapshot(&self, snapshot: Snapshot) {
    self.commit(|state| {
      state.next_id = snapshot.max_id() + 1;
      state.snapshot = snapshot;
    });
  }

  // ── People ──────────────────────────────────────────────────────────────

  pub fn add_person(&self, new: NewPerson) -> Person {
    self.commit(|state| {
      let person = new.into_person(state.fresh_id());
      state.snapshot.people.push(person.clone());
      person
    })
  }

  pub fn update_person(&self, id: EntityId, patch: PersonPatch) {
    self.commit_if(|state| {
      let Some(person) = state.snapshot.people.iter_mut().find(|p| p.id == id)
      else {
        tracing::debug!(id, "update on missing person id is a no-op");
        return false;
      };
      patch.apply(person);
      true
    });
  }

  pub fn delete_person(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.people.len();
      state.snapshot.people.retain(|p| p.id != id);
      if state.snapshot.people.len() == before {
        tracing::debug!(id, "delete on missing person id is a no-op");
        return false;
      }
      true
    });
  }

  // ── Publications ────────────────────────────────────────────────────────

  pub fn add_publication(&self, new: NewPublication) -> Publication {
    self.commit(|state| {
      let publication = new.into_publication(state.fresh_id());
      state.snapshot.publications.push(publication.clone());
      publication
    })
  }

  pub fn update_publication(&self, id: EntityId, patch: PublicationPatch) {
    self.commit_if(|state| {
      let Some(publication) =
        state.snapshot.publications.iter_mut().find(|p| p.id == id)
      else {
        tracing::debug!(id, "update on missing publication id is a no-op");
        return false;
      };
      patch.apply(publication);
      true
    });
  }

  pub fn delete_publication(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.publications.len();
      state.snapshot.publications.retain(|p| p.id != id);
      if state.snapshot.publications.len() == before {
        tracing::debug!(id, "delete on missing publication id is a no-op");
        return false;
      }
      true
    });
  }

  // ── Achievements ────────────────────────────────────────────────────────

  pub fn add_achievement(&self, new: NewAchievement) -> Achievement {
    self.commit(|state| {
      let achievement = new.into_achievement(state.fresh_id());
      state.snapshot.achievements.push(achievement.clone());
      achievement
    })
  }

  pub fn update_achievement(&self, id: EntityId, patch: AchievementPatch) {
    self.commit_if(|state| {
      let Some(achievement) =
        state.snapshot.achievements.iter_mut().find(|a| a.id == id)
      else {
        tracing::debug!(id, "update on missing achievement id is a no-op");
        return false;
      };
      patch.apply(achievement);
      true
    });
  }

  pub fn delete_achievement(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.achievements.len();
      state.snapshot.achievements.retain(|a| a.id != id);
      if state.snapshot.achievements.len() == before {
        tracing::debug!(id, "delete on missing achievement id is a no-op");
        return false;
      }
      true
    });
  }

  // ── Instruments ─────────────────────────────────────────────────────────

  pub fn add_instrument(&self, new: NewInstrument) -> Instrument {
    self.commit(|state| {
      let instrument = new.into_instrument(state.fresh_id());
      state.snapshot.instruments.push(instrument.clone());
      instrument
    })
  }

  pub fn update_instrument(&self, id: EntityId, patch: InstrumentPatch) {
    self.commit_if(|state| {
      let Some(instrument) =
        state.snapshot.instruments.iter_mut().find(|i| i.id == id)
      else {
        tracing::debug!(id, "update on missing instrument id is a no-op");
        return false;
      };
      patch.apply(instrument);
      true
    });
  }

  pub fn delete_instrument(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.instruments.len();
      state.snapshot.instruments.retain(|i| i.id != id);
      if state.snapshot.instruments.len() == before {
        tracing::debug!(id, "delete on missing instrument id is a no-op");
        return false;
      }
      true
    });
  }

  // ── Courses ─────────────────────────────────────────────────────────────

  pub fn add_course(&self, new: NewCourse) -> Course {
    self.commit(|state| {
      let course = new.into_course(state.fresh_id());
      state.snapshot.courses.push(course.clone());
      course
    })
  }

  pub fn update_course(&self, id: EntityId, patch: CoursePatch) {
    self.commit_if(|state| {
      let Some(course) = state.snapshot.courses.iter_mut().find(|c| c.id == id)
      else {
        tracing::debug!(id, "update on missing course id is a no-op");
        return false;
      };
      patch.apply(course);
      true
    });
  }

  pub fn delete_course(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.courses.len();
      state.snapshot.courses.retain(|c| c.id != id);
      if state.snapshot.courses.len() == before {
        tracing::debug!(id, "delete on missing course id is a no-op");
        return false;
      }
      true
    });
  }

  // ── News ────────────────────────────────────────────────────────────────

  pub fn add_news_item(&self, new: NewNewsItem) -> NewsItem {
    self.commit(|state| {
      let item = new.into_news_item(state.fresh_id());
      state.snapshot.news.push(item.clone());
      item
    })
  }

  pub fn update_news_item(&self, id: EntityId, patch: NewsItemPatch) {
    self.commit_if(|state| {
      let Some(item) = state.snapshot.news.iter_mut().find(|n| n.id == id)
      else {
        tracing::debug!(id, "update on missing news id is a no-op");
        return false;
      };
      patch.apply(item);
      true
    });
  }

  pub fn delete_news_item(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.news.len();
      state.snapshot.news.retain(|n| n.id != id);
      if state.snapshot.news.len() == before {
        tracing::debug!(id, "delete on missing news id is a no-op");
        return false;
      }
      true
    });
  }

  // ── Events ──────────────────────────────────────────────────────────────

  pub fn add_event(&self, new: NewEvent) -> Event {
    self.commit(|state| {
      let event = new.into_event(state.fresh_id());
      state.snapshot.events.push(event.clone());
      event
    })
  }

  pub fn update_event(&self, id: EntityId, patch: EventPatch) {
    self.commit_if(|state| {
      let Some(event) = state.snapshot.events.iter_mut().find(|e| e.id == id)
      else {
        tracing::debug!(id, "update on missing event id is a no-op");
        return false;
      };
      patch.apply(event);
      true
    });
  }

  pub fn delete_event(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.events.len();
      state.snapshot.events.retain(|e| e.id != id);
      if state.snapshot.events.len() == before {
        tracing::debug!(id, "delete on missing event id is a no-op");
        return false;
      }
      true
    });
  }

  // ── Alumni ──────────────────────────────────────────────────────────────

  pub fn add_alumni(&self, new: NewAlumni) -> Alumni {
    self.commit(|state| {
      let alumni = new.into_alumni(state.fresh_id());
      state.snapshot.alumni.push(alumni.clone());
      alumni
    })
  }

  pub fn update_alumni(&self, id: EntityId, patch: AlumniPatch) {
    self.commit_if(|state| {
      let Some(alumni) = state.snapshot.alumni.iter_mut().find(|a| a.id == id)
      else {
        tracing::debug!(id, "update on missing alumni id is a no-op");
        return false;
      };
      patch.apply(alumni);
      true
    });
  }

  pub fn delete_alumni(&self, id: EntityId) {
    self.commit_if(|state| {
      let before = state.snapshot.alumni.len();
      state.snapshot.alumni.retain(|a| a.id != id);
      if state.snapshot.alumni.len() == before {
        tracing::debug!(id, "delete on missing alumni id is a no-op");
        return false;
      }
      true
    });
  }

  // ── Singletons ──────────────────────────────────────────────────────────

  pub fn update_home_content(&self, patch: HomeContentPatch) {
    self.commit(|state| patch.apply(&mut state.snapshot.home_content));
  }

  pub fn update_contact_info(&self, patch: ContactInfoPatch) {
    self.commit(|state| patch.apply(&mut state.snapshot.contact_info));
  }

  pub fn update_about_content(&self, patch: AboutContentPatch) {
    self.commit(|state| patch.apply(&mut state.snapshot.about_content));
  }

  pub fn update_join_us_content(&self, patch: JoinUsContentPatch) {
    self.commit(|state| patch.apply(&mut state.snapshot.join_us_content));
  }
}
