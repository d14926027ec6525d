//! ContactId value object and the sequence that hands them out.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// Contact IDs are positive and 1-based: the contact with ID `n` is the
/// `n`-th contact in load order.
///
/// # Example
///
/// ```
/// use contact_lookup::domain::ContactId;
///
/// let id = ContactId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
/// assert!(ContactId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(u32);

impl ContactId {
    /// Create a new ContactId, validating that it's positive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroId` if the provided ID is zero.
    pub fn new(id: u32) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::ZeroId);
        }
        Ok(Self(id))
    }

    /// Get the raw ID.
    pub fn get(self) -> u32 {
        self.0
    }
}

// Serde support - serialize as a bare number
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out sequential contact IDs for one load.
///
/// The sequence advances before every parse attempt. A failed attempt
/// rewinds it, so the IDs of successfully parsed contacts are dense
/// (`1..=count`) and line up with load order.
#[derive(Debug, Default, Clone)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    /// Create a sequence whose first ID will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next ID.
    pub fn advance(&mut self) -> ContactId {
        self.last += 1;
        ContactId(self.last)
    }

    /// Give back the most recently reserved ID.
    pub fn rewind(&mut self) {
        self.last = self.last.saturating_sub(1);
    }

    /// The most recently reserved ID, if any.
    pub fn current(&self) -> Option<ContactId> {
        ContactId::new(self.last).ok()
    }
}
