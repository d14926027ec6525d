//! NameKey value object for first-name lookups.

use std::fmt;

/// Canonical first-name key: trimmed and uppercased, the same form
/// [`Contact`](crate::models::Contact) stores its names in.
///
/// Keys order lexicographically by their uppercased text, which is the order
/// the name tree is arranged in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
