use super::matcher::ListMatcher;
use super::traits::{BlocklistManager, BlocklistMatcher};
use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};
use url::Url;

/// An outbound request offered to the gate before it is sent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestDetails {
    pub url: String,
}

/// The gate's verdict for one request. Requests are only ever accepted or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockingResponse {
    pub cancel: bool,
}

/// Decides allow/deny for outbound requests against a cached copy of the blocklist.
///
/// The cache is only replaced by [`RequestGate::reload`] or
/// [`RequestGate::update_blocklist`]; the decision path never touches storage.
#[derive(Clone)]
pub struct RequestGate {
    blocklist: Arc<ArcSwap<Arc<dyn BlocklistMatcher>>>,
    manager: Arc<dyn BlocklistManager>,
}

impl RequestGate {
    /// Creates a gate with an empty cache. Call [`RequestGate::reload`] to populate it.
    pub fn new(manager: Arc<dyn BlocklistManager>) -> Self {
        let empty: Arc<dyn BlocklistMatcher> = Arc::new(ListMatcher::default());
        Self {
            blocklist: Arc::new(ArcSwap::new(Arc::new(empty))),
            manager,
        }
    }

    /// Rebuilds the cache from storage. On a read failure the previous cache stays active.
    pub async fn reload(&self) {
        if let Some(matcher) = self.manager.refresh().await {
            self.update_blocklist(matcher);
        }
    }

    pub fn update_blocklist(&self, new_blocklist: Arc<dyn BlocklistMatcher>) {
        self.blocklist.store(Arc::new(new_blocklist));
        debug!("Active blocklist updated ({} entries).", self.len());
    }

    pub fn should_block(&self, url: &str) -> bool {
        let blocklist = self.blocklist.load();
        if blocklist.is_empty() {
            return false;
        }

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Error checking URL {:?}: {}", url, e);
                return false;
            }
        };

        match parsed.host_str() {
            Some(hostname) => blocklist.check(hostname).is_some(),
            None => false,
        }
    }

    /// Interception hook: called once per outbound request.
    pub fn on_before_request(&self, details: &RequestDetails) -> BlockingResponse {
        let cancel = self.should_block(&details.url);
        if cancel {
            info!("Blocked request to: {}", details.url);
        }
        BlockingResponse { cancel }
    }

    pub fn len(&self) -> usize {
        self.blocklist.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the cached entries.
    pub fn domains(&self) -> Vec<String> {
        self.blocklist.load().domains()
    }
}
