//! Client-side error taxonomy
//!
//! `ValidationError` never leaves the workflow that raised it. `ApiError`
//! covers every way an outbound call can fail; both transport and
//! application failures end up in the same lifecycle rejection.

use crate::shared::lifecycle::ErrorInfo;
use thiserror::Error;

/// Local, pre-dispatch rejection of user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file first")]
    NoFileSelected,
    #[error("Unsupported file type: {name}")]
    UnsupportedFileType { name: String },
    #[error("Please describe your symptoms")]
    EmptySymptoms,
    #[error("Please enter a message")]
    EmptyMessage,
}

impl ValidationError {
    /// Unsupported drops are refused without a notice
    pub fn is_silent(&self) -> bool {
        matches!(self, ValidationError::UnsupportedFileType { .. })
    }
}

/// Failure of an outbound call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Http {
        status: u16,
        /// Server message salvaged from the error body, if any
        message: Option<String>,
    },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("{}", .message.as_deref().unwrap_or("request rejected by server"))]
    Application { message: Option<String> },
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl ApiError {
    /// Message provided by the backend, when it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Application { message } | ApiError::Http { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Convert into what the lifecycle stores and the view displays.
    ///
    /// The server message wins; everything else shows the feature's generic
    /// fallback so raw transport details stay in the log.
    pub fn into_error_info(self, fallback: &str) -> ErrorInfo {
        let message = self
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string());
        log::warn!("request failed: {self}");
        ErrorInfo::new(message)
    }
}
