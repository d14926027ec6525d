//! PhoneKey value object.

use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical lookup key for a phone number.
///
/// Every character that is not an ASCII digit is dropped, including a
/// leading `+`. The same rule is applied when a contact's phone numbers are
/// stored and when a query comes in, so `"+1 (555) 555-5555"` and
/// `"15555555555"` are the same key.
///
/// # Example
///
/// ```
/// use contact_lookup::domain::PhoneKey;
///
/// let key = PhoneKey::new("+1 (555) 123-4567");
/// assert_eq!(key.as_str(), "15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhoneKey(String);

impl PhoneKey {
    /// Normalize a raw phone number into a key.
    pub fn new(raw: &str) -> Self {
        Self(raw.chars().filter(|c| c.is_ascii_digit()).collect())
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the raw input contained no digits at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
