//! Networking modules for the customer API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the five REST operations, `error` defines the shared failure
//! taxonomy, and `types` pins the payload schema at the decode boundary.

pub mod api;
pub mod error;
pub mod types;
