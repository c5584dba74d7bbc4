//! One-way notifications from editor surfaces to the background listener.
//!
//! Messages carry no acknowledgment and the sender never waits.
//! `BlocklistUpdated` travels on a coalescing watch channel: any number of
//! pending updates collapse into one reload, and none is ever dropped.
//! Informational messages share a bounded queue and are dropped (and logged)
//! when it is full.

use crate::engine::RequestGate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuntimeMessage {
    /// An editor surface has opened. Informational only.
    SurfaceMounted,
    /// The persisted blocklist changed; the gate must reload its cache.
    BlocklistUpdated,
}

impl RuntimeMessage {
    /// Decodes a message payload.
    ///
    /// Accepts the tagged form (`{"type": "blocklist_updated"}`) as well as
    /// flag objects such as `{"popupMounted": true, "blockedDomainsUpdated": true}`,
    /// where every flag set to `true` yields one message. Unrecognized
    /// payloads and fields yield nothing.
    pub fn from_payload(payload: &Value) -> Vec<RuntimeMessage> {
        if let Ok(message) = serde_json::from_value::<RuntimeMessage>(payload.clone()) {
            return vec![message];
        }

        let flag = |name: &str| payload.get(name).and_then(Value::as_bool).unwrap_or(false);

        let mut messages = Vec::new();
        if flag("popupMounted") {
            messages.push(RuntimeMessage::SurfaceMounted);
        }
        if flag("blockedDomainsUpdated") {
            messages.push(RuntimeMessage::BlocklistUpdated);
        }
        if messages.is_empty() {
            debug!("Ignoring unrecognized message payload: {}", payload);
        }
        messages
    }
}

/// Sending half of the message channel, cloned into every editor surface.
#[derive(Clone, Debug)]
pub struct Messenger {
    tx: mpsc::Sender<RuntimeMessage>,
    updates: watch::Sender<u64>,
}

impl Messenger {
    pub fn send(&self, message: RuntimeMessage) {
        match message {
            RuntimeMessage::BlocklistUpdated => {
                self.updates.send_modify(|generation| *generation = generation.wrapping_add(1));
            }
            RuntimeMessage::SurfaceMounted => {
                if let Err(e) = self.tx.try_send(message) {
                    error!("Failed to deliver {:?}: {}", message, e);
                }
            }
        }
    }
}

/// Receiving half of the message channel. A pending reload is always
/// delivered before queued informational messages.
#[derive(Debug)]
pub struct MessageReceiver {
    rx: mpsc::Receiver<RuntimeMessage>,
    updates: watch::Receiver<u64>,
}

impl MessageReceiver {
    /// Waits for the next message. Returns `None` once every [`Messenger`]
    /// has been dropped and nothing is pending.
    pub async fn recv(&mut self) -> Option<RuntimeMessage> {
        tokio::select! {
            biased;
            Ok(()) = self.updates.changed() => {
                self.updates.borrow_and_update();
                Some(RuntimeMessage::BlocklistUpdated)
            }
            message = self.rx.recv() => message,
        }
    }

    /// Returns a pending message without waiting.
    pub fn try_recv(&mut self) -> Option<RuntimeMessage> {
        if self.updates.has_changed().unwrap_or(false) {
            self.updates.borrow_and_update();
            return Some(RuntimeMessage::BlocklistUpdated);
        }
        self.rx.try_recv().ok()
    }
}

/// Creates the message channel. The receiver belongs to [`run_listener`].
pub fn channel(capacity: usize) -> (Messenger, MessageReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let (updates_tx, updates_rx) = watch::channel(0);
    (
        Messenger {
            tx,
            updates: updates_tx,
        },
        MessageReceiver {
            rx,
            updates: updates_rx,
        },
    )
}

/// Background listener: runs until every [`Messenger`] has been dropped.
pub async fn run_listener(mut rx: MessageReceiver, gate: RequestGate) {
    while let Some(message) = rx.recv().await {
        handle_message(&gate, message).await;
    }
    info!("Message listener stopping.");
}

pub async fn handle_message(gate: &RequestGate, message: RuntimeMessage) {
    match message {
        RuntimeMessage::SurfaceMounted => {
            info!("Background notified that an editor surface has mounted.");
        }
        RuntimeMessage::BlocklistUpdated => {
            gate.reload().await;
        }
    }
}
