use std::sync::Arc;

/// The "Hot Path" engine for checking hostnames.
pub trait BlocklistMatcher: Send + Sync {
    /// Returns the blocked entry that matched, or None if allowed.
    fn check(&self, hostname: &str) -> Option<&str>;

    /// Number of entries the matcher was built from.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn domains(&self) -> Vec<String>;
}

/// The "Control Plane" for reloads.
#[async_trait::async_trait]
pub trait BlocklistManager: Send + Sync {
    /// Reads the persisted list and builds a new Matcher.
    /// Returns None if the list could not be read; the caller keeps its current matcher.
    async fn refresh(&self) -> Option<Arc<dyn BlocklistMatcher>>;
}
