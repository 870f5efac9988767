//! Post-commit event publication.

use std::error::Error;
use std::fmt;

use crate::ledger::DomainEvent;

/// Error type for publish operations.
///
/// Deliberately distinct from `StorageError`: a publish failure happens
/// after the state change is already durable, so callers must not treat it
/// as a failed commit.
#[derive(Debug)]
pub enum PublishError {
    /// Connection to the bus failed.
    ConnectionFailed(String),
    /// The bus rejected the event.
    Rejected(String),
    /// Timeout waiting for acknowledgment.
    Timeout,
    /// Other error.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::ConnectionFailed(msg) => write!(f, "connection failed: {}", msg),
            PublishError::Rejected(msg) => write!(f, "event rejected: {}", msg),
            PublishError::Timeout => write!(f, "publish timeout"),
            PublishError::Other(e) => write!(f, "publish error: {}", e),
        }
    }
}

impl Error for PublishError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PublishError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Trait for publishing domain events to a message bus.
///
/// Implementations might include an in-memory bus for tests, or adapters
/// for Kafka, NATS, or RabbitMQ. Publishing blocks until the bus accepts
/// the event — the unit of work relies on this to guarantee drained events
/// are published before its commit call returns.
pub trait EventPublisher: Send + Sync {
    /// Publish a single event to the bus.
    fn publish(&self, event: DomainEvent) -> Result<(), PublishError>;
}
