//! Bus Responder — binds the command executor to a request/response topic
//! and re-binds automatically when the connection is re-established.
//!
//! A two-state machine: unbound at construction, bound after
//! [`Responder::start`]. Every "connected" notification from the transport
//! triggers an idempotent rebind (set-replace, never accumulate), so the
//! topic holds exactly one active binding no matter how many times the
//! connection cycles.

mod responder;

pub use responder::{Responder, ResponderHandle};
