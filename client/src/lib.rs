//! Client for the EduBridge education-resource portal.
//!
//! All business logic lives in the backend service; this crate is the
//! presentational client: endpoint wrappers bound to a stored bearer
//! token, a session resolver over that token, and the view state
//! machines an embedding UI shell drives.

pub mod api;
pub mod config;
pub mod raw;
pub mod session;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;

/// Errors surfaced by the client.
///
/// Decode failures of JSON response bodies arrive as [`Error::Transport`];
/// a malformed stored token is not an error at all, the session resolver
/// simply yields no session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status, optionally carrying a
    /// message in its error body.
    #[error("{status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    /// A file exceeded the portal's client-side upload cap.
    #[error("file too large for upload ({size} bytes)")]
    UploadTooLarge { size: usize },
    /// An upload request was executed twice; the file body is consumed
    /// by the first attempt.
    #[error("upload file already consumed")]
    UploadFileMissing,
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("store encode error: {0}")]
    StoreEncode(#[from] toml::ser::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the server rejected the call outright. Dashboard-level
    /// reads treat this as "session invalid" and navigate to login.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Error::Status { status, .. } if *status == StatusCode::FORBIDDEN)
    }

    /// The server-provided error message, when one was sent.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shared state of a client instance: the HTTP client, the base URL all
/// endpoint suffixes append to, and the injected local store.
pub struct Context {
    pub http: reqwest::Client,
    pub base_url: String,
    pub store: Arc<store::LocalStore>,
}

impl Context {
    pub fn new(config: &config::Config, store: Arc<store::LocalStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            store,
        })
    }
}
