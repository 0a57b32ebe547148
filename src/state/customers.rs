//! Customer-panel state and its transitions.
//!
//! DESIGN
//! ======
//! The panel owns three independent fields: the customer list and one
//! message slot each for errors and successes. All mutation goes through
//! the named transitions below so the submit/load flows stay auditable and
//! natively testable; the page component only forwards signal updates here.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use std::time::Duration;

use crate::net::error::ApiError;
use crate::net::types::Customer;

/// Shown when the initial or reloaded list fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load customers.";

/// Shown after a successful create, until the clear timer fires.
pub const CREATE_SUCCESS_MESSAGE: &str = "Customer added successfully!";

/// Shown when a create fails for any reason other than a 400 with a
/// field-validation body.
pub const CREATE_FAILED_MESSAGE: &str =
    "Failed to add customer. Please check if the email or username already exists.";

/// How long the success message stays up before it is cleared.
pub const SUCCESS_MESSAGE_CLEAR_DELAY: Duration = Duration::from_millis(3000);

/// Transient state of the customer panel.
///
/// Replaced-wholesale semantics: a successful list fetch overwrites
/// `customers` entirely, never merges. Nothing here persists; the list is
/// re-derived from the remote service on every mount.
#[derive(Clone, Debug, Default)]
pub struct CustomersState {
    /// Customers as last returned by the remote service, in response order.
    pub customers: Vec<Customer>,
    /// Human-readable failure message; empty when nothing failed.
    pub error_message: String,
    /// Human-readable confirmation message; empty outside the post-create
    /// window.
    pub success_message: String,
}

impl CustomersState {
    /// A list fetch resolved: replace the list wholesale.
    pub fn apply_list_success(&mut self, customers: Vec<Customer>) {
        self.customers = customers;
    }

    /// A list fetch failed: surface the fixed message and keep whatever
    /// list was already showing. There is no retry.
    pub fn apply_list_failure(&mut self) {
        self.error_message = LOAD_FAILED_MESSAGE.to_owned();
    }

    /// A valid submission is about to dispatch: clear both message slots.
    /// Runs synchronously before the create call goes out.
    pub fn begin_submission(&mut self) {
        self.error_message.clear();
        self.success_message.clear();
    }

    /// The create call resolved.
    pub fn apply_create_success(&mut self) {
        self.success_message = CREATE_SUCCESS_MESSAGE.to_owned();
    }

    /// The create call failed. A 400 carrying a field-validation body is
    /// rendered field by field; every other failure gets the fixed generic
    /// message.
    pub fn apply_create_failure(&mut self, error: &ApiError) {
        self.error_message = match error.validation_body() {
            Some(body) => validation_error_message(body),
            None => CREATE_FAILED_MESSAGE.to_owned(),
        };
    }

    /// The post-create display window elapsed.
    pub fn clear_success_message(&mut self) {
        self.success_message.clear();
    }
}

/// Render a 400 validation body as comma-joined `field: message` pairs.
///
/// `serde_json::Map` is BTree-backed, so fields come out in sorted key
/// order regardless of how the server ordered them; the remote contract
/// does not promise any ordering of its own.
fn validation_error_message(body: &serde_json::Map<String, serde_json::Value>) -> String {
    body.iter()
        .map(|(field, messages)| format!("{field}: {}", field_message_text(messages)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten one field's message value: the server answers either a single
/// string or an array of strings per field.
fn field_message_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(message) => message.clone(),
        serde_json::Value::Array(messages) => messages
            .iter()
            .map(|message| match message {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
