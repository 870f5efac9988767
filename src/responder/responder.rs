//! Responder state machine and reconnect watch thread.

use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::bus::{RequestTransport, ResponderFn, TransportError};
use crate::executor::{Execute, RegistrationRequest, Response};

/// How often the watch thread checks its stop channel while waiting for
/// connection notifications.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Binds an [`Execute`] implementation to a request/response topic.
///
/// Disconnection itself is the transport's problem — the responder only
/// reacts to reconnect-complete notifications by re-registering the same
/// handler. Rebinding unbinds the previous binding before creating a fresh
/// one, so the topic never accumulates duplicate bindings and a single
/// inbound request never produces more than one reply.
pub struct Responder<T, E> {
    transport: Arc<T>,
    topic: String,
    executor: Arc<E>,
}

impl<T, E> Responder<T, E>
where
    T: RequestTransport + 'static,
    E: Execute + 'static,
{
    pub fn new(transport: Arc<T>, topic: impl Into<String>, executor: Arc<E>) -> Self {
        Responder {
            transport,
            topic: topic.into(),
            executor,
        }
    }

    /// Bind the topic and start watching for reconnects.
    ///
    /// Transitions the responder to its bound state and spawns the watch
    /// thread. Rebinding only touches the transport's binding table — it
    /// never waits on an in-flight request.
    pub fn start(self) -> Result<ResponderHandle, TransportError> {
        let handler = reply_fn(Arc::clone(&self.executor));
        let connected = self.transport.connection_events();
        let mut binding = self.transport.bind(&self.topic, Arc::clone(&handler))?;
        tracing::debug!(topic = %self.topic, "responder bound");

        let (stop_tx, stop_rx) = mpsc::channel();
        let transport = self.transport;
        let topic = self.topic;

        let handle = thread::spawn(move || loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }

            match connected.recv_timeout(STOP_POLL_INTERVAL) {
                Ok(()) => {
                    // Set-replace: drop the old binding before creating
                    // the new one so the topic never holds two at once.
                    let _ = transport.unbind(&topic, binding);
                    match transport.bind(&topic, Arc::clone(&handler)) {
                        Ok(id) => {
                            binding = id;
                            tracing::debug!(topic = %topic, "responder rebound after reconnect");
                        }
                        Err(error) => {
                            tracing::error!(topic = %topic, error = %error, "rebind failed");
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Ok(ResponderHandle {
            stop_tx,
            handle: Some(handle),
        })
    }
}

/// Wrap the executor so every delivered request yields exactly one reply,
/// whatever the outcome: malformed payloads and infrastructure errors
/// become structured failure replies instead of dropped requests.
fn reply_fn<E: Execute + 'static>(executor: Arc<E>) -> ResponderFn {
    Arc::new(move |payload: &[u8]| {
        let response = match serde_json::from_slice::<RegistrationRequest>(payload) {
            Ok(request) => match executor.execute(&request) {
                Ok(response) => response,
                Err(error) => {
                    tracing::error!(error = %error, "command execution failed");
                    Response::infrastructure_failure("internal error")
                }
            },
            Err(error) => {
                tracing::warn!(error = %error, "malformed request payload");
                Response::infrastructure_failure("malformed payload")
            }
        };

        serde_json::to_vec(&response)
            .unwrap_or_else(|_| br#"{"success":false,"errors":[]}"#.to_vec())
    })
}

/// Handle to the responder's watch thread.
///
/// `stop` (or drop) shuts the watch loop down cooperatively;
/// already-dispatched requests finish on the transport's threads, and the
/// active binding is left for host teardown.
pub struct ResponderHandle {
    stop_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ResponderHandle {
    /// Stop the watch thread and wait for it to finish.
    pub fn stop(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ResponderHandle {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
    }
}
