//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact IDs and the normalized keys the store indexes by. Each key type
//! applies its normalization at construction time, so the same rule is used
//! when a contact is indexed and when a query is answered.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod region;

pub use contact_id::{ContactId, IdSequence};
pub use email::EmailKey;
pub use errors::ValidationError;
pub use name::NameKey;
pub use phone::PhoneKey;
pub use region::RegionKey;
