//! The editing surface: view, add and remove blocked domains.
//!
//! Every mutation starts from the persisted list, persists the whole result
//! and notifies the background listener. The displayed list is updated even
//! when the write fails; it is brought back in line with storage on the next
//! [`Editor::mount`] or edit.

mod normalize;

pub use normalize::normalize_domain;

use crate::messaging::{Messenger, RuntimeMessage};
use crate::store::BlocklistStore;
use tracing::{error, info};

pub struct Editor {
    domains: Vec<String>,
    store: BlocklistStore,
    messenger: Messenger,
}

impl Editor {
    pub fn new(store: BlocklistStore, messenger: Messenger) -> Self {
        Self {
            domains: Vec::new(),
            store,
            messenger,
        }
    }

    /// Announces the surface and loads the persisted list for display.
    pub async fn mount(&mut self) {
        self.messenger.send(RuntimeMessage::SurfaceMounted);
        self.load_display().await;
    }

    /// Replaces the display with the persisted list. On a read failure the
    /// display is left as it was.
    async fn load_display(&mut self) {
        match self.store.load().await {
            Ok(domains) => self.domains = domains,
            Err(e) => error!("Error loading blocked domains: {:#}", e),
        }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Appends the normalized form of `raw`. Returns the stored entry,
    /// or `None` if the input was blank.
    pub async fn add_domain(&mut self, raw: &str) -> Option<String> {
        let domain = normalize_domain(raw)?;
        self.load_display().await;

        let mut updated = self.domains.clone();
        updated.push(domain.clone());

        if let Err(e) = self.store.save(&updated).await {
            error!("Error adding domain {}: {:#}", domain, e);
            self.domains = updated;
            return Some(domain);
        }

        info!("Added blocked domain {}", domain);
        self.domains = updated;
        self.messenger.send(RuntimeMessage::BlocklistUpdated);
        Some(domain)
    }

    /// Removes every entry equal to `target`. Returns how many were removed.
    pub async fn remove_domain(&mut self, target: &str) -> usize {
        self.load_display().await;
        let updated: Vec<String> = self
            .domains
            .iter()
            .filter(|d| d.as_str() != target)
            .cloned()
            .collect();
        let removed = self.domains.len() - updated.len();

        if let Err(e) = self.store.save(&updated).await {
            error!("Error removing domain {}: {:#}", target, e);
            self.domains = updated;
            return removed;
        }

        info!("Removed {} entries for {}", removed, target);
        self.domains = updated;
        self.messenger.send(RuntimeMessage::BlocklistUpdated);
        removed
    }
}
