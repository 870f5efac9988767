//! Persistence session seam.

use std::error::Error;
use std::fmt;

use crate::ledger::Aggregate;

/// Error from the persistence collaborator during commit.
#[derive(Debug)]
pub enum StorageError {
    /// The storage engine is unreachable or refused the operation.
    Unavailable(String),
    /// An internal lock was poisoned.
    LockPoisoned(&'static str),
    /// Other error.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Other(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorageError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// A persistence session scoped to one command execution.
///
/// Exclusively owned by its unit of work, never shared across concurrent
/// requests. `commit` reports the number of rows changed — zero means the
/// save was a no-op and nothing may be published.
pub trait Session {
    /// Persist all pending state changes for this scope. Returns the
    /// number of rows changed.
    fn commit(&mut self) -> Result<usize, StorageError>;

    /// The tracked aggregates, in a deterministic enumeration order.
    fn tracked_mut(&mut self) -> Vec<&mut dyn Aggregate>;
}
