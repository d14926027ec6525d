//! Contact Lookup - an indexed vCard contact store served over the Model Context Protocol.
//!
//! A `.vcf` file is decoded, each card is turned into a normalized contact, and
//! the contacts are indexed in memory so every lookup avoids a linear scan.
//!
//! # Architecture
//!
//! - **vcard**: Lenient vCard decoder producing raw card records
//! - **parser**: Card record to contact conversion with dense ID assignment
//! - **domain**: Contact IDs and the normalized lookup keys
//! - **models**: Contact, phone number, email and address records
//! - **store**: The `ContactStore` contract and the in-memory file store
//! - **services**: Lookup service producing client response bodies
//! - **server**: MCP tool handlers and stdio transport
//! - **cli**: Command-line flags with environment variable fallbacks
//! - **config**: Validated configuration built from the flags
//! - **logging**: Stderr and optional log file output
//! - **error**: Error types for each layer

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod server;
pub mod services;
pub mod store;
pub mod vcard;

// Re-export commonly used types
pub use config::Config;
pub use error::{CardError, ConfigError, StoreError};
pub use models::{Address, Contact, ContactRef, Email, PhoneNumber};
pub use server::ContactLookupServer;
pub use services::{ContactLookupService, ContactLookupServiceImpl, LookupResponse};
pub use store::{ContactStore, FileContactStore, StoreBackend};
