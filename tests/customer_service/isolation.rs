//! Concurrent requests never share an execution context.

use std::sync::Arc;
use std::thread;

use commit_relay::{InMemoryBus, InMemoryStore, RegistrationRequest};

use crate::support::{self, Customer};

#[test]
fn concurrent_requests_use_isolated_scopes() {
    let bus = InMemoryBus::new();
    let store = InMemoryStore::<Customer>::new();
    let executor = support::executor(&store, &bus);

    let mut workers = Vec::new();
    for i in 0..8 {
        let executor = Arc::clone(&executor);
        workers.push(thread::spawn(move || {
            let request = RegistrationRequest {
                id: format!("c-{i}"),
                name: format!("Customer {i}"),
                email: format!("c{i}@x.com"),
                tax_id: "123".to_string(),
            };
            executor.execute(&request).unwrap()
        }));
    }

    for worker in workers {
        let response = worker.join().unwrap();
        assert!(response.success);
    }

    assert_eq!(store.len(), 8);

    // Each request's event stream is independent and internally ordered,
    // whatever the interleaving across requests.
    let events = bus.published();
    assert_eq!(events.len(), 16);
    for i in 0..8 {
        let id = format!("c-{i}");
        let types: Vec<&str> = events
            .iter()
            .filter(|event| event.aggregate_id == id)
            .map(|event| event.event_type.as_str())
            .collect();
        assert_eq!(types, vec!["CustomerRegistered", "WelcomeEmailQueued"]);
    }
}

#[test]
fn one_request_failing_validation_does_not_affect_another() {
    let bus = InMemoryBus::new();
    let store = InMemoryStore::<Customer>::new();
    let executor = support::executor(&store, &bus);

    let rejected = {
        let executor = Arc::clone(&executor);
        thread::spawn(move || {
            let mut request = support::ana();
            request.id = "bad".to_string();
            request.tax_id = String::new();
            executor.execute(&request).unwrap()
        })
    };
    let accepted = {
        let executor = Arc::clone(&executor);
        thread::spawn(move || executor.execute(&support::ana()).unwrap())
    };

    assert!(!rejected.join().unwrap().success);
    assert!(accepted.join().unwrap().success);

    // Only the accepted request's state and events are visible.
    assert_eq!(store.len(), 1);
    assert!(store.get("7").unwrap().is_some());
    assert!(store.get("bad").unwrap().is_none());
    assert_eq!(bus.published().len(), 2);
}
