mod blocklist;
mod memory;
mod sqlite;
mod traits;

pub use blocklist::BlocklistStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;

use crate::config::StorageConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Opens the configured key-value backend.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend.as_str() {
        "memory" => {
            info!("Using in-memory storage; the blocklist will not survive a restart.");
            Ok(Arc::new(MemoryStore::new()))
        }
        backend => {
            if backend != "sqlite" {
                info!("Unknown storage backend '{}', defaulting to sqlite", backend);
            }
            let store = SqliteStore::open(&config.path)?;
            store.initialize()?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn storage(backend: &str) -> StorageConfig {
        StorageConfig {
            backend: backend.to_string(),
            path: ":memory:".to_string(),
            key: "blockedDomains".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_backend_falls_back_to_sqlite() {
        let store = open_store(&storage("redis")).unwrap();

        // A usable store means the kv table was created on open.
        store.set("blockedDomains", json!(["a.com"])).await.unwrap();
        assert_eq!(
            store.get("blockedDomains").await.unwrap(),
            Some(json!(["a.com"]))
        );
    }

    #[tokio::test]
    async fn test_memory_backend_starts_empty() {
        let store = open_store(&storage("memory")).unwrap();
        assert_eq!(store.get("blockedDomains").await.unwrap(), None);
    }
}
