//! Server binary for the Nebula galaxy dashboard.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `nebula-config.yaml` (or defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Create the galaxy store, which generates the first galaxy
//! 4. Serve the API and dashboard until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use nebula_core::{GalaxyStore, NebulaConfig, SystemClock};
use nebula_observer::{AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "nebula-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server cannot
/// bind its address.
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config_path = Path::new(CONFIG_PATH);
    let config = NebulaConfig::load_or_default(config_path)?;

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        config_file = config_path.exists(),
        solar_system_count = config.galaxy.solar_system_count,
        seed = ?config.galaxy.seed,
        port = config.server.port,
        "nebula-server starting"
    );

    let store = GalaxyStore::from_settings(&config.galaxy, Arc::new(SystemClock))?;
    let state = AppState::new(Arc::new(store)).with_dirs(
        config.server.public_dir.clone(),
        config.server.images_dir.clone(),
    );

    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    nebula_observer::start_server(&server_config, Arc::new(state)).await?;

    Ok(())
}
