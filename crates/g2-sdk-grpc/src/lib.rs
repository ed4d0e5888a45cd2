//! G2 gRPC client
//!
//! Typed async clients for the engine's gRPC server. Each wrapper translates
//! one RPC, converts failures into [`G2Error`], and reports every call to the
//! observers registered on it.
//!
//! ```no_run
//! use g2_sdk_grpc::{CallContext, G2ConfigMgrClient, GrpcConfig};
//!
//! # async fn run() -> Result<(), g2_sdk_grpc::G2Error> {
//! let config = GrpcConfig::default();
//! let configmgr = G2ConfigMgrClient::connect(&config).await?;
//! let ctx = CallContext::background();
//! let default_id = configmgr.get_default_config_id(&ctx).await?;
//! println!("default config: {default_id}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod flags;
pub mod g2config;
pub mod g2configmgr;
pub mod g2engine;
pub mod proto;

pub use config::GrpcConfig;
pub use g2config::{ConfigHandle, G2ConfigClient};
pub use g2configmgr::G2ConfigMgrClient;
pub use g2engine::{ExportHandle, G2EngineClient};

pub use g2_sdk_core::{
    CallContext, CancelHandle, ChannelObserver, ErrorKind, G2Error, LogLevel, MessageLogger,
    NativeError, Notification, NullObserver, Observable, Observer,
};
