//! Normalized contact records.
//!
//! A [`Contact`] owns its phone numbers, emails and addresses. Children are
//! only created through the parent's `add_*` methods, which stamp them with the
//! parent's ID, so a child's `contact_id` always matches its owner.

pub mod address;
pub mod contact;
pub mod email;
pub mod phone_number;

pub use address::{Address, AddressParts};
pub use contact::{Contact, ContactRef};
pub use email::Email;
pub use phone_number::PhoneNumber;

/// Sentinel some exporters write instead of leaving a field empty.
pub const NONE_SENTINEL: &str = "None";

/// Trim a raw field, treating blank input and the `"None"` sentinel as absent.
pub fn present(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NONE_SENTINEL {
        None
    } else {
        Some(trimmed)
    }
}
