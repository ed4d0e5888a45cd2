//! Observers and the events delivered to them.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Event describing one client call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Label set with `set_observer_origin` on the emitting client.
    pub origin: String,
    /// Component id of the emitting client (e.g. 6014 for the engine).
    pub subject_id: i32,
    pub message_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl Notification {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Listener for client call outcomes.
///
/// Implementations are called from detached tasks; a slow or panicking
/// observer only affects its own delivery.
#[async_trait]
pub trait Observer: Send + Sync {
    fn observer_id(&self) -> &str;

    async fn update_observer(&self, notification: &Notification);
}

/// Observer that only logs what it receives.
#[derive(Debug, Clone)]
pub struct NullObserver {
    id: String,
}

impl NullObserver {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Observer for NullObserver {
    fn observer_id(&self) -> &str {
        &self.id
    }

    async fn update_observer(&self, notification: &Notification) {
        tracing::debug!(
            observer_id = %self.id,
            subject_id = notification.subject_id,
            message_id = notification.message_id,
            "Observer notified"
        );
    }
}

/// Observer that forwards every notification into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    id: String,
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelObserver {
    pub fn new(id: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { id: id.into(), tx }, rx)
    }
}

#[async_trait]
impl Observer for ChannelObserver {
    fn observer_id(&self) -> &str {
        &self.id
    }

    async fn update_observer(&self, notification: &Notification) {
        // Receiver gone means nobody is listening any more.
        let _ = self.tx.send(notification.clone());
    }
}
