//! Error taxonomy and the uniform JSON error envelope.
//!
//! Every non-2xx response carries exactly this shape:
//!
//! ```json
//! {"error": {"code": "not_found", "message": "recipe not found"}}
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable error codes. This set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Client payload violates a field rule.
    ValidationError,
    /// Referenced resource does not exist.
    NotFound,
    /// Any other boundary-level failure; the status is passed through.
    HttpError,
}

impl ErrorCode {
    /// Wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::NotFound => "not_found",
            Self::HttpError => "http_error",
        }
    }

    /// The HTTP status this code always maps to, if it has a fixed one.
    ///
    /// `http_error` has none: it carries whatever status the framework or
    /// store failure produced.
    #[must_use]
    pub const fn default_status(self) -> Option<u16> {
        match self {
            Self::ValidationError => Some(422),
            Self::NotFound => Some(404),
            Self::HttpError => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `{"error": {...}}` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Code and human-readable message of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorEnvelope {
    /// Build an envelope from a code and message.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }
}
