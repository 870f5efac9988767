//! Command Executor — one isolated execution context per inbound request.
//!
//! An inbound [`RegistrationRequest`] is copied into a [`RegisterCustomer`]
//! command and dispatched to the registered [`CommandHandler`] inside a
//! fresh [`UnitOfWork`](crate::uow::UnitOfWork). Validation failures come
//! back as structured, unsuccessful [`Response`]s; only infrastructure
//! errors propagate as [`ExecuteError`].

mod command;
mod executor;
mod message;

pub use command::RegisterCustomer;
pub use executor::{CommandExecutor, CommandHandler, Execute, ExecuteError};
pub use message::{FieldError, RegistrationRequest, Response, ValidationOutcome};
