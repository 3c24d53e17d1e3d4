//! Sanitised error model returned by every repository operation.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type returned by repository operations.
pub type Outcome<T> = Result<T, StatusCodeError>;

/// Public message used for every captured fault.
pub const INTERNAL_MESSAGE: &str = "an unexpected error occurred";

/// Coarse status classification of a failed operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The input was in the wrong identifier phase or addressed nothing.
    BadRequest,
    /// The requested model does not exist.
    NotFound,
    /// An unexpected fault; details are kept internal.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
            ErrorCode::NotFound => "not_found",
            ErrorCode::Internal => "internal",
        }
    }

    /// Matching HTTP status code.
    pub fn status(self) -> u16 {
        match self {
            ErrorCode::BadRequest => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::Internal => 500,
        }
    }

    pub fn is_client_error(self) -> bool {
        !matches!(self, ErrorCode::Internal)
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-safe failure descriptor.
///
/// `code` and `message` may cross a transport boundary. `detail` holds the
/// captured fault (if any) and is only ever rendered by [`StatusCodeError::diagnostic`],
/// which is meant for operator logs. `Debug`, `Display` and `Serialize` show
/// the public parts only.
#[derive(Clone, Error, Serialize)]
#[error("{code}: {message}")]
pub struct StatusCodeError {
    code: ErrorCode,
    message: String,
    #[serde(skip)]
    detail: Option<Arc<anyhow::Error>>,
}

impl StatusCodeError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            detail: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Wraps an unexpected fault.
    ///
    /// Always classified as [`ErrorCode::Internal`] with [`INTERNAL_MESSAGE`];
    /// the fault itself is kept in `detail`.
    pub fn internal(fault: impl Into<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: INTERNAL_MESSAGE.to_string(),
            detail: Some(Arc::new(fault.into())),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// Operator-facing rendering: the public parts followed by every level of
    /// the captured fault's cause chain.
    ///
    /// Never send this to a client.
    pub fn diagnostic(&self) -> String {
        let mut out = format!("{}: {}", self.code, self.message);
        if let Some(detail) = &self.detail {
            for (depth, cause) in detail.chain().enumerate() {
                if depth == 0 {
                    let _ = write!(out, "; detail: {cause}");
                } else {
                    let _ = write!(out, "; caused by: {cause}");
                }
            }
        }
        out
    }

    /// Emits the diagnostic projection and returns `self` for chaining.
    pub fn log(&self) -> &Self {
        if self.code.is_client_error() {
            tracing::warn!(code = %self.code, diagnostic = %self.diagnostic(), "request rejected");
        } else {
            tracing::error!(code = %self.code, diagnostic = %self.diagnostic(), "operation failed");
        }
        self
    }
}

impl core::fmt::Debug for StatusCodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StatusCodeError")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("has_detail", &self.has_detail())
            .finish()
    }
}
