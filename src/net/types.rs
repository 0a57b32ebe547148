//! Typed payloads exchanged with the customer API.
//!
//! DESIGN
//! ======
//! The remote service treats a customer as an open record: an integer
//! primary key plus whatever named columns the backend defines. Instead of
//! passing raw JSON through the UI, the schema is pinned down at the decode
//! boundary: an explicit identifier field and a sorted map of scalar
//! attributes. Documents with nested objects or arrays in an attribute
//! position are rejected before they reach any view code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A customer record as exchanged with the remote service.
///
/// `id` is assigned by the server; create payloads leave it unset and the
/// field is omitted from the serialized body. Every other column travels in
/// `attrs`, flattened to top-level JSON keys on the wire. `BTreeMap` keeps
/// attribute iteration in sorted key order so derived renderings are
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Server-assigned integer identifier, used for edit/delete addressing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Remaining named attributes (e.g. name, email, username).
    #[serde(flatten)]
    pub attrs: BTreeMap<String, AttrValue>,
}

impl Customer {
    /// Look up a named attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Render a named attribute for display.
    ///
    /// Missing attributes and JSON nulls both render as the empty string so
    /// table cells stay blank rather than showing placeholder text.
    pub fn attr_text(&self, key: &str) -> String {
        self.attrs.get(key).map(ToString::to_string).unwrap_or_default()
    }
}

/// A scalar attribute value accepted at the client boundary.
///
/// Variant order matters: serde tries untagged variants top to bottom, so
/// strings must come before numbers and integers before floats. Nested
/// objects and arrays match no variant and fail the decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A JSON string.
    Text(String),
    /// A JSON number with no fractional part.
    Integer(i64),
    /// Any other JSON number.
    Float(f64),
    /// A JSON boolean.
    Bool(bool),
    /// A JSON null.
    Null,
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Login payload for `POST /customers/login/`.
///
/// The session payload the server answers with is opaque to this client and
/// is surfaced as raw JSON; see [`crate::net::api::login`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password, sent as-is over the transport.
    pub password: String,
}
