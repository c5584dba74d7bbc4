use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use domain_nope::api::{start_api_server, ApiState};
use domain_nope::config::Config;
use domain_nope::init::{init_components, setup_logging};
use domain_nope::messaging::run_listener;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Config
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config_exists = std::path::Path::new(&config_path).exists();
    let config = if config_exists {
        Config::load(&config_path).await?
    } else {
        Config::default()
    };

    // 2. Setup Logging
    setup_logging(&config);
    info!("Starting domain-nope...");

    if !config_exists {
        info!("Config file not found, using defaults.");
    }

    // 3. Storage, Gate (initial load) & Message Channel
    let components = init_components(&config).await?;
    info!("Request gate ready with {} blocked domains", components.gate.len());

    // 4. Background Listener
    tokio::spawn(run_listener(components.receiver, components.gate.clone()));

    // 5. Editor API
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid host/port in config")?;
    let state = ApiState::new(components.gate, components.editor, components.messenger);

    // 6. Graceful Shutdown
    tokio::select! {
        result = start_api_server(state, addr) => result?,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received.");
        }
    }

    Ok(())
}
