//! Error translation between the gRPC transport and the engine's native
//! error taxonomy.
//!
//! The engine server embeds its own structured error document inside the
//! gRPC status it returns:
//!
//! ```text
//! {"id":"senzing-60124001","text":"...","errors":[{"text":"0023E|Conflicting DATA_SOURCE values"}]}
//! ```
//!
//! The document travels in the status binary details or, for older servers,
//! as the status message. The reason code at the front of the innermost
//! `errors[].text` (`0023E` above) decides which [`ErrorKind`] the caller
//! sees, so that callers branch on the same classification a direct binding
//! would give them.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tonic::Status;

/// Reason codes the engine raises for bad caller input.
const BAD_USER_INPUT_CODES: &[i64] = &[
    2, 7, 23, 24, 25, 26, 27, 32, 33, 34, 35, 36, 37, 51, 53, 54, 61, 62, 63, 64, 87, 88,
];

/// Reason codes for transient failures a caller may retry.
const RETRYABLE_CODES: &[i64] = &[10, 1006, 1007, 1008, 7209, 7211, 7221];

/// Reason codes after which the engine instance cannot continue.
const UNRECOVERABLE_CODES: &[i64] = &[
    19, 20, 21, 22, 29, 30, 48, 49, 50, 999, 1001, 1002, 1003, 1004, 1005, 1009, 7213, 7217,
    7218, 7220, 7224, 7226, 7227, 7228, 7234, 7245, 7246, 7303, 7305, 7313, 7314, 7315, 7316,
    7344, 7426, 7511, 9000, 9001, 9002,
];

/// Classification of a [`G2Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    BadUserInput,
    Retryable,
    Unrecoverable,
    /// Native error whose reason code is not in any table.
    Generic,
    /// gRPC failure without a native error document.
    Transport,
    Cancelled,
    DeadlineExceeded,
    Connect,
}

impl ErrorKind {
    /// Kind for an engine reason code.
    pub fn from_reason_code(code: i64) -> Self {
        if BAD_USER_INPUT_CODES.contains(&code) {
            ErrorKind::BadUserInput
        } else if RETRYABLE_CODES.contains(&code) {
            ErrorKind::Retryable
        } else if UNRECOVERABLE_CODES.contains(&code) {
            ErrorKind::Unrecoverable
        } else {
            ErrorKind::Generic
        }
    }
}

/// Error document produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    id: String,
    text: Option<String>,
    reason_code: Option<i64>,
    raw: String,
}

#[derive(Deserialize)]
struct ErrorDocument {
    id: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    errors: Vec<Value>,
}

impl NativeError {
    /// Parse a native error document. Returns `None` for anything that is not
    /// a JSON object carrying a non-empty `id`.
    pub fn parse(payload: &str) -> Option<Self> {
        let raw = payload.trim();
        if !raw.starts_with('{') {
            return None;
        }
        let document: ErrorDocument = serde_json::from_str(raw).ok()?;
        if document.id.is_empty() {
            return None;
        }
        let reason_code = reason_code_in(&document.errors)
            .or_else(|| document.text.as_deref().and_then(parse_reason_code));
        Some(Self {
            id: document.id,
            text: document.text,
            reason_code,
            raw: raw.to_string(),
        })
    }

    /// Message id, e.g. `senzing-60124001`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Engine reason code from the innermost error, e.g. `23` for `0023E|...`.
    pub fn reason_code(&self) -> Option<i64> {
        self.reason_code
    }

    /// The document exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> ErrorKind {
        self.reason_code
            .map(ErrorKind::from_reason_code)
            .unwrap_or(ErrorKind::Generic)
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Depth-first search through `errors[].text` for the first reason code.
/// Entries may hold the code string directly, a nested document, or a
/// nested document serialised as a string.
fn reason_code_in(errors: &[Value]) -> Option<i64> {
    errors.iter().find_map(|entry| match entry.get("text")? {
        Value::String(text) => parse_reason_code(text).or_else(|| {
            serde_json::from_str::<Value>(text)
                .ok()
                .and_then(|nested| nested_reason_code(&nested))
        }),
        nested @ Value::Object(_) => nested_reason_code(nested),
        _ => None,
    })
}

fn nested_reason_code(document: &Value) -> Option<i64> {
    let errors = document.get("errors")?.as_array()?;
    reason_code_in(errors)
}

/// `"0023E|Conflicting DATA_SOURCE values"` -> `Some(23)`.
fn parse_reason_code(text: &str) -> Option<i64> {
    let (head, _) = text.split_once('|')?;
    let digits = head.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Errors returned by every client method.
#[derive(Debug, Error)]
pub enum G2Error {
    #[error("{0}")]
    BadUserInput(NativeError),

    #[error("{0}")]
    Retryable(NativeError),

    #[error("{0}")]
    Unrecoverable(NativeError),

    #[error("{0}")]
    Engine(NativeError),

    #[error("grpc status {:?}: {}", .0.code(), .0.message())]
    Transport(Box<Status>),

    #[error("context canceled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,

    #[error("connect: {0}")]
    Connect(#[from] tonic::transport::Error),
}

impl G2Error {
    /// Wrap a native document in the variant its reason code selects.
    pub fn from_native(native: NativeError) -> Self {
        match native.kind() {
            ErrorKind::BadUserInput => G2Error::BadUserInput(native),
            ErrorKind::Retryable => G2Error::Retryable(native),
            ErrorKind::Unrecoverable => G2Error::Unrecoverable(native),
            _ => G2Error::Engine(native),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            G2Error::BadUserInput(_) => ErrorKind::BadUserInput,
            G2Error::Retryable(_) => ErrorKind::Retryable,
            G2Error::Unrecoverable(_) => ErrorKind::Unrecoverable,
            G2Error::Engine(_) => ErrorKind::Generic,
            G2Error::Transport(_) => ErrorKind::Transport,
            G2Error::Cancelled => ErrorKind::Cancelled,
            G2Error::DeadlineExceeded => ErrorKind::DeadlineExceeded,
            G2Error::Connect(_) => ErrorKind::Connect,
        }
    }

    pub fn native(&self) -> Option<&NativeError> {
        match self {
            G2Error::BadUserInput(n)
            | G2Error::Retryable(n)
            | G2Error::Unrecoverable(n)
            | G2Error::Engine(n) => Some(n),
            _ => None,
        }
    }

    /// Native message id, when the server supplied one.
    pub fn id(&self) -> Option<&str> {
        self.native().map(NativeError::id)
    }

    pub fn reason_code(&self) -> Option<i64> {
        self.native().and_then(NativeError::reason_code)
    }

    /// The raw status for transport errors.
    pub fn status(&self) -> Option<&Status> {
        match self {
            G2Error::Transport(status) => Some(status),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Retryable
    }

    /// Cancellation or deadline expiry of the caller's context.
    pub fn is_context_error(&self) -> bool {
        matches!(self, G2Error::Cancelled | G2Error::DeadlineExceeded)
    }
}

/// Translate a status returned by a stub call.
pub fn convert_grpc_error(status: Status) -> G2Error {
    match native_payload(&status) {
        Some(native) => G2Error::from_native(native),
        None => G2Error::Transport(Box::new(status)),
    }
}

/// Translate the result of a stub call; `Ok` passes through untouched.
pub fn convert_grpc_result<T>(result: Result<T, Status>) -> Result<T, G2Error> {
    result.map_err(convert_grpc_error)
}

fn native_payload(status: &Status) -> Option<NativeError> {
    std::str::from_utf8(status.details())
        .ok()
        .and_then(NativeError::parse)
        .or_else(|| NativeError::parse(status.message()))
}
