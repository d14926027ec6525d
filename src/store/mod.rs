//! Indexed contact storage.
//!
//! [`ContactStore`] is the query contract the service layer depends on.
//! [`FileContactStore`] implements it over a `.vcf` file, keeping five
//! lookup structures built at load time:
//!
//! - the contact list in load order, where a contact's ID is its position
//! - a search tree keyed by first name ([`name_tree`])
//! - phone number and email maps to a single contact
//! - state and country maps to the contacts with an address there

pub mod file_store;
pub mod index;
pub mod name_tree;
pub mod traits;

pub use file_store::{FileContactStore, StoreState, VCF_EXTENSION};
pub use index::ContactIndex;
pub use name_tree::{ContactNode, ContactTree};
pub use traits::ContactStore;

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Which [`ContactStore`] implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// In-memory store loaded from a `.vcf` file.
    #[default]
    File,
}

impl StoreBackend {
    /// Short code used in configuration.
    pub fn code(&self) -> &'static str {
        match self {
            Self::File => "f",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "file" => Ok(Self::File),
            other => Err(ConfigError::InvalidValue {
                var: "DATA_STORE_SERVICE".to_string(),
                reason: format!("Unknown data store service '{}'", other),
            }),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
        }
    }
}

/// Create an empty store of the given kind.
pub fn open(backend: StoreBackend) -> Box<dyn ContactStore> {
    match backend {
        StoreBackend::File => Box::new(FileContactStore::new()),
    }
}
