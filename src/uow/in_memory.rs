//! In-memory persistence for testing and single-process scenarios.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ledger::Aggregate;

use super::session::{Session, StorageError};

/// Shared in-memory backing store.
///
/// Cheap to clone — clones share the same records. Sessions created from a
/// store stage their writes privately until commit, so concurrent sessions
/// never observe each other's uncommitted state.
pub struct InMemoryStore<A> {
    records: Arc<RwLock<HashMap<String, A>>>,
}

impl<A> Clone for InMemoryStore<A> {
    fn clone(&self) -> Self {
        InMemoryStore {
            records: Arc::clone(&self.records),
        }
    }
}

impl<A: Aggregate + Clone> Default for InMemoryStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Aggregate + Clone> InMemoryStore<A> {
    pub fn new() -> Self {
        InMemoryStore {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Open a fresh session against this store.
    pub fn session(&self) -> InMemorySession<A> {
        InMemorySession {
            records: Arc::clone(&self.records),
            staged: Vec::new(),
        }
    }

    /// Fetch a committed aggregate by id.
    pub fn get(&self, id: &str) -> Result<Option<A>, StorageError> {
        let records = self
            .records
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(records.get(id).cloned())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One request's persistence session.
///
/// Stages inserts and updates, writing them to the shared store on commit.
/// Rows changed equals the staged count; an empty stage is a no-op commit.
pub struct InMemorySession<A> {
    records: Arc<RwLock<HashMap<String, A>>>,
    staged: Vec<A>,
}

impl<A: Aggregate + Clone> InMemorySession<A> {
    /// Stage an aggregate for insert or update at commit.
    pub fn add(&mut self, aggregate: A) {
        self.staged.push(aggregate);
    }

    /// Number of staged aggregates.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }
}

impl<A: Aggregate + Clone + 'static> Session for InMemorySession<A> {
    fn commit(&mut self) -> Result<usize, StorageError> {
        if self.staged.is_empty() {
            return Ok(0);
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;
        for aggregate in &self.staged {
            records.insert(aggregate.id().to_string(), aggregate.clone());
        }
        Ok(self.staged.len())
    }

    fn tracked_mut(&mut self) -> Vec<&mut dyn Aggregate> {
        self.staged
            .iter_mut()
            .map(|a| a as &mut dyn Aggregate)
            .collect()
    }
}
