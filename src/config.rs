//! Configuration management for the contact lookup server.
//!
//! Settings come from command-line flags, falling back to environment
//! variables. It avoids polluting stdout (which MCP uses for communication):
//! `dotenvy` loads a `.env` file if present without printing anything.
//!
//! Loading happens before logging is set up, so problems that should only be
//! warned about are kept on the [`Config`] and reported by
//! [`Config::log_fallbacks`] once a subscriber is installed.

use crate::cli::Cli;
use crate::error::{ConfigError, ConfigResult};
use crate::store::StoreBackend;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory of the bundled sample contacts, relative to the crate root.
pub const SAMPLE_CONTACTS_DIR: &str = "tests/data";

/// File name of the bundled sample contacts.
pub const SAMPLE_CONTACTS_FILE: &str = "contactlookup_sample_contacts.vcf";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact lookup server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contacts file to load; the bundled sample when unset
    pub contacts_file: Option<PathBuf>,

    /// Store implementation (default: file)
    pub data_store_service: StoreBackend,

    /// Unrecognized store selector that was replaced by the default
    pub backend_fallback: Option<String>,

    /// Log level (default: "info")
    pub log_level: String,

    /// Optional file that receives a copy of the log output
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path to the `.vcf` file (default: the bundled sample)
    /// - `DATA_STORE_SERVICE`: Store implementation, `f` for file (default: `f`)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FILE`: File to append log output to (default: none)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME")])
            .map_err(|e| ConfigError::Arguments(e.to_string()))?;
        Self::from_cli(cli)
    }

    /// Build the configuration from parsed arguments.
    ///
    /// An unknown store selector is not an error: the file store is used and
    /// the rejected value is kept in `backend_fallback`.
    pub fn from_cli(cli: Cli) -> ConfigResult<Self> {
        let contacts_file = cli
            .file
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let (data_store_service, backend_fallback) = parse_backend(cli.service.as_deref());

        let log_level = cli
            .log_level
            .map(|level| level.trim().to_ascii_lowercase())
            .unwrap_or_else(|| "info".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let log_file = cli.log_file.filter(|path| !path.as_os_str().is_empty());

        Ok(Config {
            contacts_file,
            data_store_service,
            backend_fallback,
            log_level,
            log_file,
        })
    }

    /// The contacts file to load: the configured one, or the bundled sample.
    pub fn contacts_path(&self) -> PathBuf {
        self.contacts_file
            .clone()
            .unwrap_or_else(default_contacts_file)
    }

    /// Warn about settings that were replaced by defaults while loading.
    pub fn log_fallbacks(&self) {
        if let Some(raw) = &self.backend_fallback {
            warn!(
                value = %raw,
                backend = %self.data_store_service,
                "Invalid data store service, using the file store"
            );
        }
    }
}

/// Parse the backend selector, falling back to the file store on unknown values.
fn parse_backend(raw: Option<&str>) -> (StoreBackend, Option<String>) {
    match raw.map(str::trim).filter(|val| !val.is_empty()) {
        None => (StoreBackend::default(), None),
        Some(val) => match val.parse::<StoreBackend>() {
            Ok(backend) => (backend, None),
            Err(_) => (StoreBackend::default(), Some(val.to_string())),
        },
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: None,
            data_store_service: StoreBackend::default(),
            backend_fallback: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Split a Unix-style relative path into its components.
///
/// Lets paths written with `/` be rebuilt with the platform separator.
/// Empty components are kept: `"/a//b/"` gives `["", "a", "", "b", ""]`.
pub fn split_unix_path(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

/// The bundled sample contacts file under the crate root.
pub fn default_contacts_file() -> PathBuf {
    let dir: PathBuf = split_unix_path(SAMPLE_CONTACTS_DIR)
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(dir)
        .join(SAMPLE_CONTACTS_FILE)
}
