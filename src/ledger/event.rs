//! Immutable domain event records.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// An immutable fact describing a state change, destined for publication
/// once the change is durable.
///
/// Owned by the raising aggregate until drained; ownership transfers to
/// the publish step for the duration of the publish call only.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainEvent {
    /// Identity of the aggregate that raised this event.
    pub aggregate_id: String,
    /// Event type tag (e.g., "CustomerRegistered").
    pub event_type: String,
    /// Serialized payload (bitcode binary).
    pub payload: Vec<u8>,
}

impl DomainEvent {
    /// Create an event from an already-serialized payload.
    pub fn new(
        aggregate_id: impl Into<String>,
        event_type: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            aggregate_id: aggregate_id.into(),
            event_type: event_type.into(),
            payload,
        }
    }

    /// Create an event with a bitcode-serialized payload.
    pub fn encode<T: Serialize>(
        aggregate_id: impl Into<String>,
        event_type: impl Into<String>,
        payload: &T,
    ) -> Result<Self, bitcode::Error> {
        let bytes = bitcode::serialize(payload)?;
        Ok(Self::new(aggregate_id, event_type, bytes))
    }

    /// Decode the payload from bitcode binary format.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, bitcode::Error> {
        bitcode::deserialize(&self.payload)
    }
}
