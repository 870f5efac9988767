//! Bus collaborators — event publication and request/response transport.
//!
//! Two seams face the message bus:
//!
//! - [`EventPublisher`] — the post-commit publication channel the unit of
//!   work drains domain events into.
//! - [`RequestTransport`] — topic bindings and connection-lifecycle
//!   notifications for the request/response responder.
//!
//! The bus connection handle is the one resource shared across concurrent
//! requests; both traits are therefore `&self` and `Send + Sync`.
//! [`InMemoryBus`] implements both for testing and single-process use.

mod in_memory;
mod publisher;
mod transport;

pub use in_memory::InMemoryBus;
pub use publisher::{EventPublisher, PublishError};
pub use transport::{BindingId, RequestTransport, ResponderFn, TransportError};
