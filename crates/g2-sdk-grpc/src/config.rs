//! Connection configuration: load from YAML and/or the environment, then
//! open a `tonic` channel.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use g2_sdk_core::{G2Error, LogLevel};
use serde::{Deserialize, Serialize};
use tonic::transport::{Channel, Endpoint};

/// Default engine gRPC server address.
pub const DEFAULT_GRPC_URL: &str = "http://localhost:8261";

pub const ENV_GRPC_URL: &str = "SENZING_TOOLS_GRPC_URL";
pub const ENV_CONNECT_TIMEOUT: &str = "SENZING_TOOLS_GRPC_CONNECT_TIMEOUT";
pub const ENV_OBSERVER_ORIGIN: &str = "SENZING_TOOLS_OBSERVER_ORIGIN";
pub const ENV_LOG_LEVEL: &str = "SENZING_TOOLS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrpcConfig {
    /// Server URL, e.g. `http://localhost:8261`.
    pub url: String,
    /// Seconds to wait for the connection to be established.
    pub connect_timeout_secs: Option<u64>,
    /// Upper bound for every call, applied by the channel on top of any
    /// per-call deadline.
    pub request_timeout_secs: Option<u64>,
    /// Origin label stamped on every notification.
    pub observer_origin: Option<String>,
    pub log_level: LogLevel,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GRPC_URL.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            observer_origin: None,
            log_level: LogLevel::Info,
        }
    }
}

impl GrpcConfig {
    /// Load from a YAML file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Parsing {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Defaults overridden by the environment.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `SENZING_TOOLS_*` environment overrides on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(ENV_GRPC_URL) {
            self.url = url;
        }
        if let Some(secs) = lookup(ENV_CONNECT_TIMEOUT) {
            self.connect_timeout_secs = Some(
                secs.trim()
                    .parse()
                    .with_context(|| format!("{ENV_CONNECT_TIMEOUT}={secs}"))?,
            );
        }
        if let Some(origin) = lookup(ENV_OBSERVER_ORIGIN) {
            self.observer_origin = Some(origin);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level
                .trim()
                .parse()
                .with_context(|| format!("{ENV_LOG_LEVEL}={level}"))?;
        }
        Ok(self)
    }

    pub fn endpoint(&self) -> Result<Endpoint, G2Error> {
        let mut endpoint = Endpoint::from_shared(self.url.clone())?;
        if let Some(secs) = self.connect_timeout_secs {
            endpoint = endpoint.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.request_timeout_secs {
            endpoint = endpoint.timeout(Duration::from_secs(secs));
        }
        Ok(endpoint)
    }

    pub async fn connect(&self) -> Result<Channel, G2Error> {
        tracing::debug!(url = %self.url, "Connecting to engine gRPC server");
        let channel = self.endpoint()?.connect().await?;
        Ok(channel)
    }
}
