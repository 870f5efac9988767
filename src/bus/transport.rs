//! Request/response transport seam.

use std::error::Error;
use std::fmt;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// Identifier for an active topic binding.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BindingId(pub u64);

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binding-{}", self.0)
    }
}

/// A bound reply function: consumes a raw request payload and produces
/// exactly one raw reply payload.
pub type ResponderFn = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

/// Error type for transport binding operations.
#[derive(Debug)]
pub enum TransportError {
    /// Connection to the bus is down.
    ConnectionLost(String),
    /// No binding with the given id exists on the topic.
    UnknownBinding { topic: String, id: BindingId },
    /// Other error.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ConnectionLost(msg) => write!(f, "connection lost: {}", msg),
            TransportError::UnknownBinding { topic, id } => {
                write!(f, "no {} on topic {}", id, topic)
            }
            TransportError::Other(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TransportError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Trait for transports that support request/response topic bindings.
///
/// `bind` appends a binding — transports do not deduplicate, so binding the
/// same topic twice leaves two active bindings and an inbound request would
/// produce two replies. Set-replace semantics on reconnect are the
/// responder's job: unbind the previous binding before binding again.
pub trait RequestTransport: Send + Sync {
    /// Register a reply function for a topic. Returns the binding's id.
    fn bind(&self, topic: &str, responder: ResponderFn) -> Result<BindingId, TransportError>;

    /// Remove a previously created binding.
    fn unbind(&self, topic: &str, id: BindingId) -> Result<(), TransportError>;

    /// Subscribe to connection-lifecycle notifications.
    ///
    /// The returned channel fires once per (re-)established connection,
    /// including the very first connect, with no payload beyond the fact of
    /// connection. Single-subscriber: calling this again replaces the
    /// previous subscription.
    fn connection_events(&self) -> Receiver<()>;
}
