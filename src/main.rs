//! Contact lookup server - Main entry point
//!
//! Loads a vCard contacts file into the indexed store and serves lookups
//! over the Model Context Protocol (MCP) on stdio.
//!
//! ```bash
//! contact-lookup --file ./contacts.vcf --service f
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use contact_lookup::cli::Cli;
use contact_lookup::logging;
use contact_lookup::server::{run_server, ContactLookupServer};
use contact_lookup::services::{ContactLookupService, ContactLookupServiceImpl};
use contact_lookup::store::{self, ContactStore};
use contact_lookup::Config;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env before parsing so its values act as flag fallbacks
    let _ = dotenvy::dotenv();
    let config = Config::from_cli(Cli::parse());

    // Initialize logging (stderr plus optional file, never stdout since MCP uses it)
    let (log_level, log_file) = match &config {
        Ok(cfg) => (cfg.log_level.clone(), cfg.log_file.clone()),
        Err(_) => ("info".to_string(), None),
    };
    let log_file_result = logging::init(&log_level, log_file.as_deref());

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let (Err(e), Some(path)) = (log_file_result, log_file.as_deref()) {
        warn!(path = %path.display(), error = %e, "Cannot open log file, logging to stderr only");
    }
    config.log_fallbacks();

    let contacts_path = config.contacts_path();
    if config.contacts_file.is_none() {
        info!(
            "No contacts file provided, using the bundled sample: {}",
            contacts_path.display()
        );
    }

    info!(
        "Using data store service: {}",
        config.data_store_service
    );

    // Build the store before sharing it; it is read-only afterwards
    let mut contact_store = store::open(config.data_store_service);
    if !contact_store.set_path(&contacts_path) {
        bail!("Contacts file rejected: {}", contacts_path.display());
    }
    if !contact_store.initialize() {
        bail!("Data store service failed to initialize");
    }
    info!("Data store service initialized with {} contacts", contact_store.count());

    let contact_store: Arc<dyn ContactStore> = Arc::from(contact_store);
    let lookup_service =
        Arc::new(ContactLookupServiceImpl::new(contact_store)) as Arc<dyn ContactLookupService>;

    let server = ContactLookupServer::new(lookup_service);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    run_server(server).await?;

    info!("Contact lookup server shutdown complete");
    Ok(())
}
