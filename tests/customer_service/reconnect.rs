//! Reconnect lifecycle: K connected signals leave exactly one binding.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use commit_relay::{InMemoryBus, InMemoryStore, Responder, ResponderHandle, Response};

use crate::support::{self, Customer};

fn started() -> (InMemoryBus, InMemoryStore<Customer>, ResponderHandle) {
    let bus = InMemoryBus::new();
    let store = InMemoryStore::<Customer>::new();
    let handle = Responder::new(
        Arc::new(bus.clone()),
        support::TOPIC,
        support::executor(&store, &bus),
    )
    .start()
    .unwrap();
    (bus, store, handle)
}

#[test]
fn three_reconnects_keep_a_single_binding() {
    let (bus, _store, handle) = started();

    for _ in 0..3 {
        bus.announce_connected();
    }
    thread::sleep(Duration::from_millis(250));

    assert_eq!(bus.binding_count(support::TOPIC), 1);

    // A single request after the churn still gets exactly one reply.
    let payload = serde_json::to_vec(&support::ana()).unwrap();
    let replies = bus.request(support::TOPIC, &payload);
    assert_eq!(replies.len(), 1);

    let response: Response = serde_json::from_slice(&replies[0]).unwrap();
    assert!(response.success);

    handle.stop();
}

#[test]
fn initial_connect_signal_does_not_duplicate_the_binding() {
    let (bus, store, handle) = started();

    bus.announce_connected();
    thread::sleep(Duration::from_millis(150));

    assert_eq!(bus.binding_count(support::TOPIC), 1);

    let payload = serde_json::to_vec(&support::ana()).unwrap();
    let replies = bus.request(support::TOPIC, &payload);
    assert_eq!(replies.len(), 1);
    assert_eq!(store.len(), 1);

    handle.stop();
}

#[test]
fn requests_are_answered_between_reconnects() {
    let (bus, store, handle) = started();

    bus.announce_connected();
    thread::sleep(Duration::from_millis(150));

    let payload = serde_json::to_vec(&support::ana()).unwrap();
    assert_eq!(bus.request(support::TOPIC, &payload).len(), 1);

    bus.announce_connected();
    thread::sleep(Duration::from_millis(150));

    let mut second = support::ana();
    second.id = "8".to_string();
    let payload = serde_json::to_vec(&second).unwrap();
    assert_eq!(bus.request(support::TOPIC, &payload).len(), 1);

    assert_eq!(store.len(), 2);
    handle.stop();
}

#[test]
fn stop_leaves_binding_for_host_teardown() {
    let (bus, _store, handle) = started();
    handle.stop();

    assert_eq!(bus.binding_count(support::TOPIC), 1);

    // A request delivered before teardown still gets its reply.
    let payload = serde_json::to_vec(&support::ana()).unwrap();
    assert_eq!(bus.request(support::TOPIC, &payload).len(), 1);
}
