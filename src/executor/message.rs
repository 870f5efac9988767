//! Wire messages: the inbound request and the reply.
//!
//! JSON on the wire. One request maps to exactly one command and exactly
//! one response; no batching, no streaming.

use serde::{Deserialize, Serialize};

/// Inbound integration request announcing a newly registered user.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RegistrationRequest {
    /// User identity.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Tax identifier; `tax-id` on the wire.
    #[serde(rename = "tax-id")]
    pub tax_id: String,
}

/// A single field-level validation failure.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of business validation: an ordered list of field failures.
///
/// Empty means the command was accepted. Validation failures are expected,
/// not exceptional — they never travel as errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationOutcome {
    errors: Vec<FieldError>,
}

impl ValidationOutcome {
    /// An accepted command.
    pub fn accepted() -> Self {
        Self::default()
    }

    /// A rejection with a single field failure.
    pub fn rejected(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationOutcome {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// Append a field failure, preserving order.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

/// The reply sent for every delivered request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

impl Response {
    /// Failure reply for a request that could not be decoded or executed.
    pub fn infrastructure_failure(message: impl Into<String>) -> Self {
        Response {
            success: false,
            errors: vec![FieldError::new("request", message)],
        }
    }
}

impl From<ValidationOutcome> for Response {
    fn from(outcome: ValidationOutcome) -> Self {
        Response {
            success: outcome.is_valid(),
            errors: outcome.errors,
        }
    }
}
