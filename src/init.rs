//! Initialization helpers for the application startup.

use crate::config::Config;
use crate::editor::Editor;
use crate::engine::{RequestGate, StoreManager};
use crate::messaging::{self, MessageReceiver};
use crate::store::{open_store, BlocklistStore};
use anyhow::Result;
use std::sync::Arc;

const QUIET_TARGETS: [&str; 2] = ["hyper", "tower_http"];

/// Sets up the tracing subscriber with the configured filters.
pub fn setup_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = config.logging.level.clone();

        // Suppress HTTP stack logs unless explicitly enabled
        for target in QUIET_TARGETS {
            if !filter.contains(target) {
                filter.push_str(&format!(",{}=off", target));
            }
        }

        tracing_subscriber::EnvFilter::new(filter)
    });

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Everything the service runs on, wired together.
pub struct Components {
    pub gate: RequestGate,
    pub editor: Editor,
    pub messenger: messaging::Messenger,
    pub receiver: MessageReceiver,
}

/// Opens storage, builds the gate with its initial cache, and creates the message channel.
pub async fn init_components(config: &Config) -> Result<Components> {
    let backend = open_store(&config.storage)?;
    let store = BlocklistStore::new(backend, config.storage.key.clone());

    let gate = RequestGate::new(Arc::new(StoreManager::new(store.clone())));
    gate.reload().await;

    let (messenger, receiver) = messaging::channel(config.messaging.channel_capacity);
    let editor = Editor::new(store, messenger.clone());

    Ok(Components {
        gate,
        editor,
        messenger,
        receiver,
    })
}
