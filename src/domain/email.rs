//! EmailKey value object.

use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical lookup key for an email address: trimmed and lowercased.
///
/// No format validation is performed; the card file is trusted to contain
/// whatever addresses it contains, and a malformed address is still a key.
///
/// # Example
///
/// ```
/// use contact_lookup::domain::EmailKey;
///
/// let key = EmailKey::new("  Allen.Taylor@Example.NET ");
/// assert_eq!(key.as_str(), "allen.taylor@example.net");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EmailKey(String);

impl EmailKey {
    /// Normalize a raw address into a key.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for blank input.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for EmailKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_key_normalizes() {
        assert_eq!(
            EmailKey::new("ALLENTAYLOR@EXAMPLE.NET"),
            EmailKey::new(" allentaylor@example.net\t")
        );
    }

    #[test]
    fn test_email_key_blank() {
        assert!(EmailKey::new("   ").is_empty());
    }
}
