//! REST client for the remote customer-management API.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`. Native: stubs returning
//! [`ApiError::Network`] since the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation resolves with the decoded body on HTTP 2xx and fails
//! with an [`ApiError`] otherwise: `Network` when no response arrived,
//! `Status` with the raw status code and any JSON body for non-2xx, and
//! `Decode` when a 2xx body does not match the expected schema. There are
//! no retries and no timeout enforcement; callers own the UX for failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, Customer};

/// Base resource path of the customer service. Trailing slashes on the
/// individual endpoints are significant to the remote framework's router.
pub const API_BASE_URL: &str = "http://localhost:8000/customers";

#[cfg(any(test, feature = "csr"))]
fn customers_endpoint() -> String {
    format!("{API_BASE_URL}/")
}

#[cfg(any(test, feature = "csr"))]
fn customer_edit_endpoint(id: i64) -> String {
    format!("{API_BASE_URL}/edit/{id}/")
}

#[cfg(any(test, feature = "csr"))]
fn customer_delete_endpoint(id: i64) -> String {
    format!("{API_BASE_URL}/delete/{id}/")
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint() -> String {
    format!("{API_BASE_URL}/login/")
}

/// Build the [`ApiError::Status`] for a non-2xx response, capturing the
/// JSON body when the server sent one.
#[cfg(feature = "csr")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.ok();
    ApiError::Status { status, body }
}

/// Fetch all customers via `GET /customers/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that does not decode as a customer array.
pub async fn list_customers() -> Result<Vec<Customer>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&customers_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<Vec<Customer>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Create a customer via `POST /customers/`.
///
/// The payload is sent as-is; the server owns validation and answers a 400
/// with a field → message mapping when it rejects the record.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that does not decode as the created customer.
pub async fn add_customer(customer: &Customer) -> Result<Customer, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&customers_endpoint())
            .json(customer)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<Customer>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = customer;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Update a customer via `PUT /customers/edit/{id}/`.
///
/// Part of the remote service's contract surface; the current UI has no
/// edit flow, so nothing in this crate calls it yet.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that does not decode as the updated customer.
pub async fn update_customer(id: i64, customer: &Customer) -> Result<Customer, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&customer_edit_endpoint(id))
            .json(customer)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<Customer>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, customer);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Delete a customer via `DELETE /customers/delete/{id}/`.
///
/// The server acknowledges with an empty body. Part of the contract
/// surface; the current UI has no delete flow.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn delete_customer(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&customer_delete_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Authenticate via `POST /customers/login/`.
///
/// The session payload is opaque to this client and handed back as raw
/// JSON. Part of the contract surface; the current UI has no login flow.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a
/// non-JSON body.
pub async fn login(credentials: &Credentials) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
