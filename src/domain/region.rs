//! RegionKey value object for state and country lookups.

use std::fmt;

/// Canonical lookup key for a state or country: trimmed and uppercased.
///
/// # Example
///
/// ```
/// use contact_lookup::domain::RegionKey;
///
/// assert_eq!(RegionKey::new(" usa "), RegionKey::new("USA"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RegionKey(String);

impl RegionKey {
    /// Normalize a raw state or country into a key.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
