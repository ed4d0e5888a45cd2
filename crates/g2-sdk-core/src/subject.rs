//! The set of observers registered on one client.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::G2Error;
use crate::observer::Observer;

/// Observers keyed by `observer_id`. Delivery works on a snapshot so that a
/// register or unregister never waits on observers.
#[derive(Default)]
pub struct Subject {
    observers: RwLock<Vec<Arc<dyn Observer>>>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the observer unless one with the same id is already present.
    pub async fn register_observer(&self, observer: Arc<dyn Observer>) -> Result<(), G2Error> {
        let mut observers = self.observers.write().await;
        if observers
            .iter()
            .any(|o| o.observer_id() == observer.observer_id())
        {
            return Ok(());
        }
        observers.push(observer);
        Ok(())
    }

    /// Removes the observer with this id; unknown ids are ignored.
    pub async fn unregister_observer(&self, observer_id: &str) -> Result<(), G2Error> {
        self.observers
            .write()
            .await
            .retain(|o| o.observer_id() != observer_id);
        Ok(())
    }

    pub async fn has_observers(&self) -> bool {
        !self.observers.read().await.is_empty()
    }

    pub async fn len(&self) -> usize {
        self.observers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        !self.has_observers().await
    }

    pub async fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        self.observers.read().await.clone()
    }
}

impl std::fmt::Debug for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<String> = match self.observers.try_read() {
            Ok(observers) => observers
                .iter()
                .map(|o| o.observer_id().to_string())
                .collect(),
            Err(_) => vec!["<locked>".to_string()],
        };
        f.debug_struct("Subject").field("observers", &ids).finish()
    }
}
