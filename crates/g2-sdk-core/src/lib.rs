//! G2 SDK core
//!
//! Plumbing shared by the G2 gRPC clients:
//!
//! - [`error`] translates `tonic::Status` values into the engine's native
//!   error taxonomy.
//! - [`subject`] and [`notifier`] keep the per-client observer list and
//!   deliver call notifications on detached tasks.
//! - [`instrumentation`] ties both together with the injected
//!   [`logging::MessageLogger`] into the pipeline every wrapper method runs
//!   through.
//! - [`context`] provides per-call cancellation and deadlines.

pub mod context;
pub mod error;
pub mod instrumentation;
pub mod logging;
pub mod notifier;
pub mod observer;
pub mod subject;

pub use context::{CallContext, CancelHandle};
pub use error::{convert_grpc_error, convert_grpc_result, ErrorKind, G2Error, NativeError};
pub use instrumentation::{Details, Instrumentation, Observable, ObserverOperations, Operation};
pub use logging::{LogLevel, MessageLogger};
pub use observer::{ChannelObserver, Notification, NullObserver, Observer};
pub use subject::Subject;
