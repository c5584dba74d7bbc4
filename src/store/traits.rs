use anyhow::Result;
use serde_json::Value;

/// Local key-value storage holding JSON values.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Overwrites the value stored under `key` in a single write.
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}
