//! Phone number belonging to a contact.

use crate::domain::{ContactId, PhoneKey};
use serde::Serialize;

/// A phone number reduced to its digits.
///
/// The stored number is the same string the store indexes by, so a contact
/// can always be found by any of its own numbers.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneNumber {
    number: PhoneKey,
    contact_id: ContactId,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

impl PhoneNumber {
    pub(crate) fn new(number: &str, contact_id: ContactId, kind: Option<&str>) -> Self {
        Self {
            number: PhoneKey::new(number),
            contact_id,
            kind: kind.map(|k| k.trim().to_uppercase()),
        }
    }

    pub fn number(&self) -> &PhoneKey {
        &self.number
    }

    pub fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    /// Type tag, e.g. `CELL` or `WORK`, uppercased.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

// The owner's ID is not part of a phone number's value.
impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.kind == other.kind
    }
}

impl Eq for PhoneNumber {}
