//! Card parsing: decoded card records to [`Contact`]s.
//!
//! The parser owns the [`IdSequence`] for one load, so two stores loading
//! at the same time never share or corrupt each other's IDs.

mod card_parser;

pub use card_parser::{build_contact, CardParser};

pub use crate::models::Contact;
