//! Per-call cancellation and deadlines.
//!
//! A `CallContext` travels with every client call. Calls made with a context
//! that is already cancelled or past its deadline fail immediately without
//! touching the network; otherwise the RPC is raced against the context and
//! the remaining time is forwarded to the server as the gRPC timeout.

use std::future::pending;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::G2Error;

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancelled: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Cancels every context derived from the same `with_cancel` call.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl CallContext {
    /// Context that never cancels and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            cancelled: Some(rx),
            deadline: None,
        };
        (ctx, CancelHandle { tx })
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline_after(timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: None,
            deadline: Some(deadline),
        }
    }

    /// Same cancellation source, deadline set to `timeout` from now (or the
    /// existing deadline if that is earlier).
    pub fn deadline_after(mut self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < candidate => existing,
            _ => candidate,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// `Some` once the context is cancelled or expired.
    pub fn err(&self) -> Option<G2Error> {
        if self.cancelled.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(G2Error::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(G2Error::DeadlineExceeded);
        }
        None
    }

    /// Resolves with the context error once the context is done. Never
    /// resolves for a background context.
    pub async fn done(&self) -> G2Error {
        let cancelled = async {
            match &self.cancelled {
                Some(rx) => {
                    let mut rx = rx.clone();
                    // Sender dropped without cancelling: this context can no
                    // longer be cancelled.
                    let closed = rx.wait_for(|cancelled| *cancelled).await.is_err();
                    if closed {
                        pending::<()>().await;
                    }
                }
                None => pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            _ = cancelled => G2Error::Cancelled,
            _ = expired => G2Error::DeadlineExceeded,
        }
    }

    /// Wrap a message in a `tonic::Request`, forwarding the remaining time as
    /// the gRPC timeout.
    pub fn request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        if let Some(remaining) = self.remaining() {
            request.set_timeout(remaining);
        }
        request
    }
}
