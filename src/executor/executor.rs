//! Scoped command execution.

use std::error::Error;
use std::fmt;

use crate::bus::{EventPublisher, PublishError};
use crate::uow::{Session, StorageError, UnitOfWork};

use super::command::RegisterCustomer;
use super::message::{RegistrationRequest, Response, ValidationOutcome};

/// Infrastructure error during command execution.
///
/// Validation failures are not errors — they travel inside
/// [`ValidationOutcome`]. These are the programmer/infra failures that
/// propagate past the handler.
#[derive(Debug)]
pub enum ExecuteError {
    /// Persistence failed; nothing was published.
    Storage(StorageError),
    /// An event failed to publish after the state change was durable.
    Publish(PublishError),
    /// Other error.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecuteError::Storage(e) => write!(f, "storage failure: {}", e),
            ExecuteError::Publish(e) => write!(f, "publish failure after commit: {}", e),
            ExecuteError::Other(e) => write!(f, "execution error: {}", e),
        }
    }
}

impl Error for ExecuteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExecuteError::Storage(e) => Some(e),
            ExecuteError::Publish(e) => Some(e),
            ExecuteError::Other(e) => Some(e.as_ref()),
        }
    }
}

impl From<StorageError> for ExecuteError {
    fn from(err: StorageError) -> Self {
        ExecuteError::Storage(err)
    }
}

impl From<PublishError> for ExecuteError {
    fn from(err: PublishError) -> Self {
        ExecuteError::Publish(err)
    }
}

/// Business handler seam: accepts a command, returns a validation outcome.
///
/// The handler mutates aggregates through the scope's session and calls
/// [`UnitOfWork::commit`] itself — commit is part of the business flow, not
/// the executor's.
pub trait CommandHandler<S: Session, P: EventPublisher>: Send + Sync {
    /// Handle one command inside the given execution scope.
    fn handle(
        &self,
        command: RegisterCustomer,
        scope: &mut UnitOfWork<S, P>,
    ) -> Result<ValidationOutcome, ExecuteError>;
}

/// Object-safe execution capability the responder binds to a topic.
pub trait Execute: Send + Sync {
    fn execute(&self, request: &RegistrationRequest) -> Result<Response, ExecuteError>;
}

type ContextFactory<S, P> = Box<dyn Fn() -> UnitOfWork<S, P> + Send + Sync>;

/// Executes each request against a fresh, isolated unit of work.
///
/// The context factory is called exactly once per `execute`; the returned
/// unit of work is owned by that call and dropped on every exit path,
/// including validation and persistence failures. Two concurrent
/// executions never share a session, a command instance, or aggregate
/// instances — per-call isolation is what makes concurrent request
/// handling safe without locking.
pub struct CommandExecutor<S, P, H> {
    contexts: ContextFactory<S, P>,
    handler: H,
}

impl<S, P, H> CommandExecutor<S, P, H>
where
    S: Session,
    P: EventPublisher,
    H: CommandHandler<S, P>,
{
    pub fn new<F>(contexts: F, handler: H) -> Self
    where
        F: Fn() -> UnitOfWork<S, P> + Send + Sync + 'static,
    {
        CommandExecutor {
            contexts: Box::new(contexts),
            handler,
        }
    }

    /// Run one command through a fresh scope and wrap the outcome.
    pub fn execute(&self, request: &RegistrationRequest) -> Result<Response, ExecuteError> {
        let command = RegisterCustomer::from_request(request);
        let mut scope = (self.contexts)();
        let outcome = self.handler.handle(command, &mut scope)?;
        Ok(Response::from(outcome))
    }
}

impl<S, P, H> Execute for CommandExecutor<S, P, H>
where
    S: Session,
    P: EventPublisher,
    H: CommandHandler<S, P>,
{
    fn execute(&self, request: &RegistrationRequest) -> Result<Response, ExecuteError> {
        CommandExecutor::execute(self, request)
    }
}
