//! Registration scenarios: validation rejection and the full
//! commit-then-publish round trip.

use std::sync::Arc;

use commit_relay::{ExecuteError, FieldError, InMemoryBus, InMemoryStore, Responder, Response};

use crate::support::{self, Customer, CustomerRegistered};

#[test]
fn rejects_missing_tax_id_without_committing() {
    let bus = InMemoryBus::new();
    let store = InMemoryStore::<Customer>::new();
    let executor = support::executor(&store, &bus);

    let mut request = support::ana();
    request.tax_id = String::new();

    let response = executor.execute(&request).unwrap();
    assert!(!response.success);
    assert_eq!(response.errors, vec![FieldError::new("tax-id", "required")]);

    // Commit never ran: nothing stored, nothing published.
    assert!(store.is_empty());
    assert!(bus.published().is_empty());
}

#[test]
fn registers_and_publishes_in_raise_order() {
    let bus = InMemoryBus::new();
    let store = InMemoryStore::<Customer>::new();
    let executor = support::executor(&store, &bus);

    let response = executor.execute(&support::ana()).unwrap();
    assert!(response.success);
    assert!(response.errors.is_empty());

    let stored = store.get("7").unwrap().unwrap();
    assert_eq!(stored.name, "Ana");
    assert_eq!(stored.tax_id, "123");

    assert_eq!(
        bus.published_types(),
        vec!["CustomerRegistered", "WelcomeEmailQueued"]
    );

    let registered: CustomerRegistered = bus.published()[0].decode().unwrap();
    assert_eq!(registered.id, "7");
    assert_eq!(registered.email, "a@x.com");
}

#[test]
fn replies_through_the_responder() {
    let bus = InMemoryBus::new();
    let store = InMemoryStore::<Customer>::new();
    let handle = Responder::new(
        Arc::new(bus.clone()),
        support::TOPIC,
        support::executor(&store, &bus),
    )
    .start()
    .unwrap();

    let payload = serde_json::to_vec(&support::ana()).unwrap();
    let replies = bus.request(support::TOPIC, &payload);
    assert_eq!(replies.len(), 1);

    let response: Response = serde_json::from_slice(&replies[0]).unwrap();
    assert!(response.success);
    assert_eq!(store.len(), 1);

    handle.stop();
}

#[test]
fn publish_failure_after_commit_is_surfaced_not_swallowed() {
    let bus = InMemoryBus::new();
    bus.reject_publishes(true);
    let store = InMemoryStore::<Customer>::new();
    let executor = support::executor(&store, &bus);

    let error = executor.execute(&support::ana()).unwrap_err();
    assert!(matches!(error, ExecuteError::Publish(_)));

    // The state change is durable even though publication failed.
    assert!(store.get("7").unwrap().is_some());
    assert!(bus.published().is_empty());
}
