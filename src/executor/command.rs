//! The command consumed by the business handler.

use super::message::RegistrationRequest;

/// Immutable command built from a [`RegistrationRequest`] by pure field
/// copy — no transformation, no validation. Consumed exactly once per
/// request.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterCustomer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub tax_id: String,
}

impl RegisterCustomer {
    pub fn from_request(request: &RegistrationRequest) -> Self {
        RegisterCustomer {
            customer_id: request.id.clone(),
            name: request.name.clone(),
            email: request.email.clone(),
            tax_id: request.tax_id.clone(),
        }
    }
}
