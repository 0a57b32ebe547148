//! Creation-form draft state and its validity rule.
//!
//! DESIGN
//! ======
//! The form binds three text inputs. A draft is submittable only when all
//! fields are non-blank after trimming and the email splits into a user
//! and host part around a single `@`; an invalid draft is silently
//! ignored by the panel, producing no network call and no state change.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{AttrValue, Customer};

/// Draft contents of the customer creation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerForm {
    /// Display name field, as typed.
    pub name: String,
    /// Email field, as typed.
    pub email: String,
    /// Username field, as typed.
    pub username: String,
}

impl CustomerForm {
    /// Whether the draft may be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.username.trim().is_empty()
            && email_is_plausible(self.email.trim())
    }

    /// Build the create payload from the trimmed field values.
    ///
    /// `id` stays unset; the server assigns it and the list reload after a
    /// successful create is what surfaces the assigned value.
    #[must_use]
    pub fn to_customer(&self) -> Customer {
        Customer {
            id: None,
            attrs: [
                ("name".to_owned(), AttrValue::from(self.name.trim())),
                ("email".to_owned(), AttrValue::from(self.email.trim())),
                ("username".to_owned(), AttrValue::from(self.username.trim())),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Reset every field to empty, as after a successful create.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Minimal email shape check: one `@` with a non-empty user and host part.
/// Real address validation belongs to the remote service.
fn email_is_plausible(email: &str) -> bool {
    match email.split_once('@') {
        Some((user, host)) => {
            !user.is_empty() && !host.is_empty() && !host.contains('@')
        }
        None => false,
    }
}
