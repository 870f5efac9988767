//! Commit coordinator: persist, then drain and publish.

use std::sync::Arc;

use crate::bus::{EventPublisher, PublishError};
use crate::ledger::DomainEvent;

use super::session::{Session, StorageError};

/// Result of a [`UnitOfWork::commit`].
///
/// `persisted` is the persistence success flag and is never flipped by a
/// publish failure — once rows are written the state change is durable.
/// Publish failures travel in `publish_failure`, a secondary channel the
/// caller can escalate, retry, or drop (the known dual-write gap).
#[derive(Debug)]
pub struct CommitOutcome {
    /// Whether persistence changed any rows.
    pub persisted: bool,
    /// Number of events published before the first failure, if any.
    pub published: usize,
    /// The first publish failure; remaining publishes were aborted.
    pub publish_failure: Option<PublishError>,
}

impl CommitOutcome {
    fn noop() -> Self {
        CommitOutcome {
            persisted: false,
            published: 0,
            publish_failure: None,
        }
    }
}

/// The transactional boundary for one command execution.
///
/// Owns its [`Session`] exclusively; shares the bus publisher handle with
/// every other in-flight request.
pub struct UnitOfWork<S, P> {
    session: S,
    publisher: Arc<P>,
}

impl<S: Session, P: EventPublisher> UnitOfWork<S, P> {
    pub fn new(session: S, publisher: Arc<P>) -> Self {
        UnitOfWork { session, publisher }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Persist pending changes, then drain and publish accumulated events.
    ///
    /// Zero rows changed means nothing is published; events raised
    /// beforehand remain undrained for a later successful commit. On
    /// success every tracked aggregate's ledger is cleared before the
    /// first publish, so a publish failure cannot cause the same event to
    /// be redrained on retry.
    ///
    /// Publishing is sequential and order-preserving: per-aggregate FIFO,
    /// cross-aggregate order following the session's tracked enumeration.
    /// The first publish failure aborts the remaining publishes.
    pub fn commit(&mut self) -> Result<CommitOutcome, StorageError> {
        let rows = self.session.commit()?;
        if rows == 0 {
            return Ok(CommitOutcome::noop());
        }

        let mut drained: Vec<DomainEvent> = Vec::new();
        for aggregate in self.session.tracked_mut() {
            drained.extend(aggregate.ledger_mut().drain());
        }

        let total = drained.len();
        let mut published = 0;
        let mut publish_failure = None;

        for event in drained {
            match self.publisher.publish(event) {
                Ok(()) => published += 1,
                Err(error) => {
                    tracing::error!(
                        published,
                        dropped = total - published,
                        error = %error,
                        "publish failed after durable commit"
                    );
                    publish_failure = Some(error);
                    break;
                }
            }
        }

        Ok(CommitOutcome {
            persisted: true,
            published,
            publish_failure,
        })
    }
}
