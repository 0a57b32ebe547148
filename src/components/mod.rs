//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the creation form and the list table; orchestration
//! (network calls, state transitions) stays in `pages::customers`.

pub mod customer_form;
pub mod customer_table;
