//! commit_relay — transactional domain-event dispatch.
//!
//! Domain events raised inside a unit of work are published if and only if
//! the underlying state change was durably committed. A bus responder binds
//! a command executor to a request/response topic and re-establishes that
//! binding transparently after a connection loss, with one isolated
//! execution context per inbound request.
//!
//! ## Architecture
//!
//! ```text
//! inbound request
//!       │
//!       ▼
//! ┌─────────────┐   fresh scope   ┌──────────────────┐
//! │  Responder  │ ──────────────► │ CommandExecutor  │
//! └─────────────┘                 └──────────────────┘
//!       ▲                                  │
//!       │ exactly one reply               ▼
//!       │                         CommandHandler mutates aggregates
//!       │                                  │
//!       │                                  ▼
//!       │                  UnitOfWork::commit — persist, then drain
//!       │                  each aggregate's EventLedger and publish
//!       └──────────────────────── in raise order
//! ```
//!
//! Delivery is at-least-once: a successful commit guarantees its events are
//! published before the commit call returns, but a crash between persist
//! and publish can replay events — consumers must be idempotent.

pub mod bus;
pub mod executor;
pub mod ledger;
pub mod responder;
pub mod uow;

pub use bus::{
    BindingId, EventPublisher, InMemoryBus, PublishError, RequestTransport, ResponderFn,
    TransportError,
};
pub use executor::{
    CommandExecutor, CommandHandler, Execute, ExecuteError, FieldError, RegisterCustomer,
    RegistrationRequest, Response, ValidationOutcome,
};
pub use ledger::{Aggregate, DomainEvent, EventLedger};
pub use responder::{Responder, ResponderHandle};
pub use uow::{CommitOutcome, InMemorySession, InMemoryStore, Session, StorageError, UnitOfWork};
