//! Unit-of-Work Commit Coordinator — the only path from entity mutation to
//! event visibility.
//!
//! [`UnitOfWork::commit`] persists pending changes through the [`Session`],
//! and only when persistence reports changed rows does it drain each
//! tracked aggregate's event ledger and publish the drained events, in
//! order, to the bus. Commit-then-publish: a publish can never precede
//! durability.

mod in_memory;
mod session;
mod unit_of_work;

pub use in_memory::{InMemorySession, InMemoryStore};
pub use session::{Session, StorageError};
pub use unit_of_work::{CommitOutcome, UnitOfWork};
