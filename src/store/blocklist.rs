use super::traits::KeyValueStore;
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

/// The persisted blocklist: one JSON array of domain strings under a single key.
#[derive(Clone)]
pub struct BlocklistStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl BlocklistStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted list. A key that was never written yields an empty list.
    pub async fn load(&self) -> Result<Vec<String>> {
        let value = self
            .backend
            .get(&self.key)
            .await
            .context("Failed to read blocklist from storage")?;

        match value {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("Stored '{}' is not a list of domains", self.key)),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the persisted list in a single write.
    pub async fn save(&self, domains: &[String]) -> Result<()> {
        let value = Value::from(domains.to_vec());
        self.backend
            .set(&self.key, value)
            .await
            .context("Failed to write blocklist to storage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_absent_key_is_empty() {
        let store = BlocklistStore::new(Arc::new(MemoryStore::new()), "blockedDomains");
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_keeps_order_and_duplicates() {
        let store = BlocklistStore::new(Arc::new(MemoryStore::new()), "blockedDomains");
        let domains = vec![
            "b.com".to_string(),
            "a.com".to_string(),
            "b.com".to_string(),
        ];
        store.save(&domains).await.unwrap();
        assert_eq!(store.load().await.unwrap(), domains);
    }

    #[tokio::test]
    async fn test_malformed_value_is_a_read_error() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set("blockedDomains", json!({ "not": "a list" }))
            .await
            .unwrap();

        let store = BlocklistStore::new(backend, "blockedDomains");
        assert!(store.load().await.is_err());
    }
}
