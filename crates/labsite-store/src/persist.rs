//! Background persistence task.
//!
//! Mutators enqueue the full post-mutation snapshot; this task writes it to
//! the backend. Consecutive pending writes coalesce — only the newest
//! snapshot is saved, which keeps a burst of admin edits from queueing a
//! write per keystroke. A failed save never rolls back in-memory state; it
//! is logged and published on the outcome channel for a supervising layer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use labsite_core::{Snapshot, SnapshotStore};
use tokio::sync::{mpsc, oneshot, watch};

/// The result of the most recent save attempt.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
  /// No save has been attempted yet this session.
  Idle,
  Saved {
    at: DateTime<Utc>,
  },
  Failed {
    error: String,
    at:    DateTime<Utc>,
  },
}

impl SaveOutcome {
  pub fn is_failed(&self) -> bool { matches!(self, Self::Failed { .. }) }
}

pub(crate) enum PersistCmd {
  Write(Snapshot),
  /// Acknowledged once every write enqueued before it has been attempted.
  Flush(oneshot::Sender<()>),
}

pub(crate) async fn run<B: SnapshotStore>(
  backend:    Arc<B>,
  mut rx:     mpsc::UnboundedReceiver<PersistCmd>,
  outcome_tx: watch::Sender<SaveOutcome>,
) {
  while let Some(cmd) = rx.recv().await {
    let mut pending = None;
    let mut flushes = Vec::new();
    stage(cmd, &mut pending, &mut flushes);

    // Drain whatever else is already queued; only the latest snapshot
    // needs to hit the backend.
    while let Ok(cmd) = rx.try_recv() {
      stage(cmd, &mut pending, &mut flushes);
    }

    if let Some(snapshot) = pending {
      let outcome = match backend.save(&snapshot).await {
        Ok(()) => SaveOutcome::Saved { at: Utc::now() },
        Err(e) => {
          tracing::error!(
            error = %e,
            "snapshot save failed; in-memory state remains authoritative"
          );
          SaveOutcome::Failed { error: e.to_string(), at: Utc::now() }
        }
      };
      outcome_tx.send_replace(outcome);
    }

    for ack in flushes {
      let _ = ack.send(());
    }
  }
}

fn stage(
  cmd:     PersistCmd,
  pending: &mut Option<Snapshot>,
  flushes: &mut Vec<oneshot::Sender<()>>,
) {
  match cmd {
    PersistCmd::Write(snapshot) => *pending = Some(snapshot),
    PersistCmd::Flush(ack) => flushes.push(ack),
  }
}
