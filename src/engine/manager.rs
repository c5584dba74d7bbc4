use super::matcher::ListMatcher;
use super::traits::{BlocklistManager, BlocklistMatcher};
use crate::store::BlocklistStore;
use std::sync::Arc;
use tracing::{error, info};

/// Builds matchers from the persisted blocklist.
pub struct StoreManager {
    store: BlocklistStore,
}

impl StoreManager {
    pub fn new(store: BlocklistStore) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl BlocklistManager for StoreManager {
    async fn refresh(&self) -> Option<Arc<dyn BlocklistMatcher>> {
        match self.store.load().await {
            Ok(domains) => {
                info!("Loaded blocked domains: {:?}", domains);
                Some(Arc::new(ListMatcher::new(domains)))
            }
            Err(e) => {
                error!("Error loading blocked domains: {:#}", e);
                None
            }
        }
    }
}
