//! Transient view state owned by the customer panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `customers` holds the list and message slots with their named
//! transitions; `form` holds the creation-form draft and its validity
//! rule. Both are plain structs so every transition tests natively.

pub mod customers;
pub mod form;
