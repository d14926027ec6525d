//! Email address belonging to a contact.

use crate::domain::{ContactId, EmailKey};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Email {
    email: String,
    contact_id: ContactId,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

impl Email {
    pub(crate) fn new(email: &str, contact_id: ContactId, kind: Option<&str>) -> Self {
        Self {
            email: email.trim().to_string(),
            contact_id,
            kind: kind.map(|k| k.trim().to_lowercase()),
        }
    }

    /// The address as written in the card, trimmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The address as the store indexes it.
    pub fn key(&self) -> EmailKey {
        EmailKey::new(&self.email)
    }

    pub fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email && self.kind == other.kind
    }
}

impl Eq for Email {}
