//! Fire-and-forget delivery of notifications.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::runtime::Handle;

use crate::observer::{Notification, Observer};

/// Deliver `notification` to every observer, each on its own task.
///
/// Returns immediately. A panicking observer is logged and does not affect
/// delivery to the others. Outside a tokio runtime the notification is
/// dropped.
pub fn notify(observers: Vec<Arc<dyn Observer>>, notification: Notification) {
    if observers.is_empty() {
        return;
    }
    let Ok(runtime) = Handle::try_current() else {
        tracing::warn!(
            subject_id = notification.subject_id,
            message_id = notification.message_id,
            "No tokio runtime, dropping notification"
        );
        return;
    };

    let notification = Arc::new(notification);
    for observer in observers {
        let event = Arc::clone(&notification);
        runtime.spawn(async move {
            let delivery = AssertUnwindSafe(observer.update_observer(&event)).catch_unwind();
            if delivery.await.is_err() {
                tracing::warn!(
                    observer_id = %observer.observer_id(),
                    message_id = event.message_id,
                    "Observer panicked during notification"
                );
            }
        });
    }
}
