//! In-process mock engine server shared by the integration tests.
//!
//! All three services run on one random local port. State is kept in plain
//! mutex-guarded structs; errors are returned the way the real server does,
//! with the native error document as the status message.
#![allow(dead_code)]

mod engine_service;

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use g2_sdk_grpc::proto::g2config::g2_config_server::G2ConfigServer;
use g2_sdk_grpc::proto::g2configmgr::g2_config_mgr_server::G2ConfigMgrServer;
use g2_sdk_grpc::proto::g2engine::g2_engine_server::G2EngineServer;
use g2_sdk_grpc::{GrpcConfig, Notification};
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedReceiver;
use tonic::transport::{Channel, Server};
use tonic::Status;
use tracing_subscriber::fmt::MakeWriter;

#[allow(unused_imports)]
pub use config_service::{MockConfig, MockConfigMgr, TEMPLATE_CONFIG};
#[allow(unused_imports)]
pub use engine_service::{MockEngine, KNOWN_DATA_SOURCES, LAST_MODIFIED};

/// Native error document carried in a status message.
pub fn native_status(id: &str, reason: &str) -> Status {
    Status::unknown(format!(
        r#"{{"id":"{id}","text":"{reason}","errors":[{{"text":"{reason}"}}]}}"#
    ))
}

pub struct MockServer {
    pub addr: SocketAddr,
}

impl MockServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind TCP listener");
        let addr = listener.local_addr().expect("Failed to get local address");

        tokio::spawn(async move {
            Server::builder()
                .add_service(G2ConfigServer::new(MockConfig::default()))
                .add_service(G2ConfigMgrServer::new(MockConfigMgr::default()))
                .add_service(G2EngineServer::new(MockEngine::default()))
                .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
                .await
                .expect("mock gRPC server failed");
        });

        Self { addr }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> GrpcConfig {
        GrpcConfig {
            url: self.url(),
            connect_timeout_secs: Some(5),
            ..GrpcConfig::default()
        }
    }

    pub async fn channel(&self) -> Channel {
        self.config()
            .connect()
            .await
            .expect("Failed to connect to mock server")
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// In-memory sink for formatted log output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a fmt subscriber capturing the SDK's own output, down to
    /// TRACE, for the current thread until the guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("g2_sdk_core=trace"))
            .with_ansi(false)
            .without_time()
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub async fn next_notification(rx: &mut UnboundedReceiver<Notification>) -> Notification {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for notification")
        .expect("observer channel closed")
}

/// True if nothing arrives within a short grace period.
pub async fn stays_quiet(rx: &mut UnboundedReceiver<Notification>) -> bool {
    !matches!(
        tokio::time::timeout(Duration::from_millis(150), rx.recv()).await,
        Ok(Some(_))
    )
}
