//! Command-line arguments.
//!
//! Every flag falls back to an environment variable, so the server can be
//! configured either way (a flag wins when both are given).

use clap::Parser;
use std::path::PathBuf;

/// Contact lookup server: serves lookups over a vCard contacts file using
/// the Model Context Protocol on stdio.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "contact-lookup", version)]
pub struct Cli {
    /// Contacts file (`.vcf`) to load.
    ///
    /// Defaults to the bundled sample contacts.
    #[arg(long, env = "CONTACTS_FILE")]
    pub file: Option<String>,

    /// Data store service: `f` for the in-memory file store.
    #[arg(long, env = "DATA_STORE_SERVICE")]
    pub service: Option<String>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
