//! Per-client bookkeeping shared by every wrapper method: the observer
//! subject, the origin label, the injected logger, and the call pipeline
//! that ties context handling, error translation, tracing and notification
//! together.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::context::CallContext;
use crate::error::{convert_grpc_result, G2Error};
use crate::logging::{LogLevel, MessageLogger};
use crate::notifier;
use crate::observer::{Notification, Observer};
use crate::subject::Subject;

/// Identifying parameters of a call, in declaration order.
pub type Details = Vec<(&'static str, String)>;

/// Message ids owned by one client method. The trace exit id is always the
/// entry id plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub trace_id: i32,
    pub notify_id: i32,
}

impl Operation {
    pub const fn new(name: &'static str, trace_id: i32, notify_id: i32) -> Self {
        Self {
            name,
            trace_id,
            notify_id,
        }
    }

    pub const fn exit_id(&self) -> i32 {
        self.trace_id + 1
    }
}

/// Message ids of the observer and logging methods every client exposes.
#[derive(Debug, Clone, Copy)]
pub struct ObserverOperations {
    pub register_observer: Operation,
    pub set_log_level: Operation,
    pub set_observer_origin: Operation,
    pub unregister_observer: Operation,
}

pub struct Instrumentation {
    logger: MessageLogger,
    origin: RwLock<String>,
    // None until the first registration and again once the last observer
    // leaves.
    subject: RwLock<Option<Arc<Subject>>>,
}

impl Instrumentation {
    pub fn new(logger: MessageLogger) -> Self {
        Self {
            logger,
            origin: RwLock::new(String::new()),
            subject: RwLock::new(None),
        }
    }

    pub fn component_id(&self) -> i32 {
        self.logger.component_id()
    }

    pub fn logger(&self) -> &MessageLogger {
        &self.logger
    }

    pub fn is_trace(&self) -> bool {
        self.logger.level() == LogLevel::Trace
    }

    pub async fn origin(&self) -> String {
        self.origin.read().await.clone()
    }

    /// Whether a subject is currently attached.
    pub async fn has_subject(&self) -> bool {
        self.subject.read().await.is_some()
    }

    pub async fn has_observers(&self) -> bool {
        let subject = self.subject.read().await.clone();
        match subject {
            Some(subject) => subject.has_observers().await,
            None => false,
        }
    }

    pub async fn register_observer(
        &self,
        op: &Operation,
        observer: Arc<dyn Observer>,
    ) -> Result<(), G2Error> {
        let observer_id = observer.observer_id().to_string();
        let result = {
            // Held across the registration so a concurrent unregister cannot
            // detach the subject in between.
            let mut guard = self.subject.write().await;
            let subject = guard.get_or_insert_with(|| Arc::new(Subject::new()));
            subject.register_observer(observer).await
        };
        self.notify(
            op.notify_id,
            result.as_ref().err(),
            vec![("observerID", observer_id)],
        )
        .await;
        result
    }

    pub async fn unregister_observer(
        &self,
        op: &Operation,
        observer_id: &str,
    ) -> Result<(), G2Error> {
        let mut guard = self.subject.write().await;
        let Some(subject) = guard.clone() else {
            return Ok(());
        };

        // Notify before removing so the departing observer sees its own
        // unregistration.
        let notification = self
            .notification(
                op.notify_id,
                None,
                vec![("observerID", observer_id.to_string())],
            )
            .await;
        notifier::notify(subject.snapshot().await, notification);

        let result = subject.unregister_observer(observer_id).await;
        if !subject.has_observers().await {
            *guard = None;
        }
        result
    }

    pub async fn set_origin(&self, op: &Operation, origin: &str) {
        *self.origin.write().await = origin.to_string();
        self.notify(op.notify_id, None, vec![("origin", origin.to_string())])
            .await;
    }

    pub async fn set_log_level(&self, op: &Operation, level: LogLevel) {
        self.logger.set_level(level);
        self.notify(op.notify_id, None, vec![("logLevel", level.to_string())])
            .await;
    }

    /// Hand a notification to the current observers, if any. Returns without
    /// waiting for delivery.
    pub async fn notify(&self, message_id: i32, err: Option<&G2Error>, details: Details) {
        let subject = self.subject.read().await.clone();
        let Some(subject) = subject else {
            return;
        };
        let observers = subject.snapshot().await;
        if observers.is_empty() {
            return;
        }
        let notification = self.notification(message_id, err, details).await;
        notifier::notify(observers, notification);
    }

    async fn notification(
        &self,
        message_id: i32,
        err: Option<&G2Error>,
        details: Details,
    ) -> Notification {
        Notification {
            origin: self.origin().await,
            subject_id: self.component_id(),
            message_id,
            error: err.map(ToString::to_string),
            details: details
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }

    /// Run one stub call.
    ///
    /// An already finished context fails fast without calling the stub. The
    /// call is otherwise raced against the context; errors from the stub go
    /// through [`convert_grpc_result`]. Every completed call, successful or
    /// not, is reported to the observers with `details`. Calls ended by the
    /// context are not.
    ///
    /// `args` lists every argument of the call and is only built when the
    /// logger is at `TRACE`, for the entry and exit lines.
    pub async fn invoke<T, A, F>(
        &self,
        ctx: &CallContext,
        op: &Operation,
        args: A,
        details: Details,
        call: F,
    ) -> Result<T, G2Error>
    where
        A: FnOnce() -> Details,
        F: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        if let Some(err) = ctx.err() {
            return Err(err);
        }

        let args = self.is_trace().then(args);
        let started = Instant::now();
        if let Some(args) = &args {
            self.trace_entry(op, args);
        }

        let result = tokio::select! {
            response = call => convert_grpc_result(response.map(tonic::Response::into_inner)),
            err = ctx.done() => Err(err),
        };

        if let Some(args) = &args {
            self.trace_exit(op, args, result.as_ref().err(), started.elapsed());
        }
        if result.as_ref().is_err_and(G2Error::is_context_error) {
            return result;
        }
        self.notify(op.notify_id, result.as_ref().err(), details)
            .await;
        result
    }

    pub fn trace_entry(&self, op: &Operation, args: &Details) {
        self.logger.log(
            op.trace_id,
            format_args!("Enter {}({})", op.name, format_details(args)),
        );
    }

    pub fn trace_exit(
        &self,
        op: &Operation,
        args: &Details,
        err: Option<&G2Error>,
        elapsed: Duration,
    ) {
        let outcome = err.map_or_else(|| "ok".to_string(), ToString::to_string);
        self.logger.log(
            op.exit_id(),
            format_args!(
                "Exit {}({}) -> {}, elapsed {}ms",
                op.name,
                format_details(args),
                outcome,
                elapsed.as_millis()
            ),
        );
    }
}

impl std::fmt::Debug for Instrumentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instrumentation")
            .field("component_id", &self.component_id())
            .field("log_level", &self.logger.level())
            .finish_non_exhaustive()
    }
}

fn format_details(details: &Details) -> String {
    details
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Observer registration, origin labelling and log level control, shared by
/// every client.
#[async_trait]
pub trait Observable: Send + Sync {
    fn instrumentation(&self) -> &Instrumentation;

    fn observer_operations(&self) -> &'static ObserverOperations;

    /// Identifies the transport behind this client.
    fn sdk_id(&self) -> &'static str {
        "grpc"
    }

    async fn register_observer(
        &self,
        ctx: &CallContext,
        observer: Arc<dyn Observer>,
    ) -> Result<(), G2Error> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }
        let op = &self.observer_operations().register_observer;
        self.instrumentation()
            .register_observer(op, observer)
            .await
    }

    async fn unregister_observer(
        &self,
        ctx: &CallContext,
        observer: &dyn Observer,
    ) -> Result<(), G2Error> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }
        let op = &self.observer_operations().unregister_observer;
        self.instrumentation()
            .unregister_observer(op, observer.observer_id())
            .await
    }

    async fn has_observers(&self) -> bool {
        self.instrumentation().has_observers().await
    }

    async fn set_observer_origin(&self, ctx: &CallContext, origin: &str) -> Result<(), G2Error> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }
        let op = &self.observer_operations().set_observer_origin;
        self.instrumentation().set_origin(op, origin).await;
        Ok(())
    }

    async fn observer_origin(&self) -> String {
        self.instrumentation().origin().await
    }

    async fn set_log_level(&self, ctx: &CallContext, level: LogLevel) -> Result<(), G2Error> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }
        let op = &self.observer_operations().set_log_level;
        self.instrumentation().set_log_level(op, level).await;
        Ok(())
    }

    fn log_level(&self) -> LogLevel {
        self.instrumentation().logger().level()
    }
}
