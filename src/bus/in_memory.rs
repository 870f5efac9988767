//! In-memory bus for testing and single-process scenarios.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, RwLock};

use crate::ledger::DomainEvent;

use super::publisher::{EventPublisher, PublishError};
use super::transport::{BindingId, RequestTransport, ResponderFn, TransportError};

/// In-memory bus implementing both the publish and request/response sides.
///
/// Features:
/// - Thread-safe, cheap to clone — clones share the same state
/// - Published events land in an append-only log with inspection helpers
/// - Topic bindings accumulate per the [`RequestTransport`] contract, so
///   duplicate-binding bugs are observable: `request` returns one reply per
///   active binding
/// - Connection-lifecycle signals can be fired with `announce_connected`
///
/// ## Example
///
/// ```
/// use commit_relay::{DomainEvent, EventPublisher, InMemoryBus};
///
/// let bus = InMemoryBus::new();
/// bus.publish(DomainEvent::new("c-1", "CustomerRegistered", Vec::new()))
///     .unwrap();
/// assert_eq!(bus.published_types(), vec!["CustomerRegistered"]);
/// ```
#[derive(Clone)]
pub struct InMemoryBus {
    /// Append-only log of published events.
    published: Arc<RwLock<Vec<DomainEvent>>>,
    /// Active bindings per topic, in bind order.
    bindings: Arc<RwLock<HashMap<String, Vec<(BindingId, ResponderFn)>>>>,
    next_binding: Arc<AtomicU64>,
    /// The single connection-lifecycle subscriber.
    connected: Arc<Mutex<Option<Sender<()>>>>,
    /// When set, `publish` fails — simulates the dual-write gap.
    reject_publishes: Arc<AtomicBool>,
}

impl Default for InMemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBus {
    pub fn new() -> Self {
        Self {
            published: Arc::new(RwLock::new(Vec::new())),
            bindings: Arc::new(RwLock::new(HashMap::new())),
            next_binding: Arc::new(AtomicU64::new(1)),
            connected: Arc::new(Mutex::new(None)),
            reject_publishes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// All published events, in publish order.
    pub fn published(&self) -> Vec<DomainEvent> {
        self.published.read().unwrap().clone()
    }

    /// All published event types, in publish order.
    pub fn published_types(&self) -> Vec<String> {
        self.published
            .read()
            .unwrap()
            .iter()
            .map(|e| e.event_type.clone())
            .collect()
    }

    /// Number of active bindings for a topic.
    pub fn binding_count(&self, topic: &str) -> usize {
        self.bindings
            .read()
            .unwrap()
            .get(topic)
            .map(|list| list.len())
            .unwrap_or(0)
    }

    /// Deliver a request to every active binding on the topic, collecting
    /// one reply per binding.
    ///
    /// Handlers run outside the binding-table lock, so a concurrent
    /// bind/unbind never waits on an in-flight request.
    pub fn request(&self, topic: &str, payload: &[u8]) -> Vec<Vec<u8>> {
        let handlers: Vec<ResponderFn> = self
            .bindings
            .read()
            .unwrap()
            .get(topic)
            .map(|list| list.iter().map(|(_, f)| Arc::clone(f)).collect())
            .unwrap_or_default();

        handlers.iter().map(|handler| handler(payload)).collect()
    }

    /// Fire a "connection established" notification to the subscriber, if
    /// any. Fired on initial connect and once per successful reconnect.
    pub fn announce_connected(&self) {
        if let Some(tx) = self.connected.lock().unwrap().as_ref() {
            let _ = tx.send(());
        }
    }

    /// Toggle publish failures. While set, every `publish` returns an
    /// error without touching the log.
    pub fn reject_publishes(&self, reject: bool) {
        self.reject_publishes.store(reject, Ordering::SeqCst);
    }
}

impl EventPublisher for InMemoryBus {
    fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        if self.reject_publishes.load(Ordering::SeqCst) {
            return Err(PublishError::Rejected("publishing disabled".to_string()));
        }
        self.published.write().unwrap().push(event);
        Ok(())
    }
}

impl RequestTransport for InMemoryBus {
    fn bind(&self, topic: &str, responder: ResponderFn) -> Result<BindingId, TransportError> {
        let id = BindingId(self.next_binding.fetch_add(1, Ordering::Relaxed));
        self.bindings
            .write()
            .unwrap()
            .entry(topic.to_string())
            .or_default()
            .push((id, responder));
        Ok(id)
    }

    fn unbind(&self, topic: &str, id: BindingId) -> Result<(), TransportError> {
        let mut bindings = self.bindings.write().unwrap();
        let list = bindings
            .get_mut(topic)
            .ok_or_else(|| TransportError::UnknownBinding {
                topic: topic.to_string(),
                id,
            })?;

        let before = list.len();
        list.retain(|(bound, _)| *bound != id);
        if list.len() == before {
            return Err(TransportError::UnknownBinding {
                topic: topic.to_string(),
                id,
            });
        }
        Ok(())
    }

    fn connection_events(&self) -> Receiver<()> {
        let (tx, rx) = channel();
        *self.connected.lock().unwrap() = Some(tx);
        rx
    }
}
