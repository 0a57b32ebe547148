//! # customer-admin
//!
//! Leptos + WASM admin frontend for a remote customer-management API.
//! The app is a single page: a customer list fed by the remote service and
//! a creation form that posts back to it. All persistence and identity
//! live on the remote side; this crate only holds transient view state.
//!
//! This crate contains the application shell, the customer page, form and
//! table components, panel state, and the REST client for the customer API.
//!
//! Browser-only code (HTTP calls, timers, the mount entry point) is gated
//! behind the `csr` feature so the unit-test suite builds and runs on the
//! native target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(app::App);
}
