//! Entity Event Ledger — per-aggregate buffer of pending domain events.
//!
//! Aggregates raise [`DomainEvent`]s while a command mutates them; the
//! events sit in the aggregate's [`EventLedger`] until the unit of work
//! drains them during a successful commit. Pure data structures, no I/O.
//!
//! Every aggregate implements the [`Aggregate`] trait so the unit of work
//! can enumerate touched aggregates explicitly — no change-tracker
//! reflection involved.

mod aggregate;
mod event;
mod ledger;

pub use aggregate::Aggregate;
pub use event::DomainEvent;
pub use ledger::EventLedger;
