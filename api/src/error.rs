// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Backend client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport layer error: connection refused, TLS, timeout.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The backend rejected the credentials or the caller's rights.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success status.
    #[error("{status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as sent by the backend.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The message the backend attached to a rejected request, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Unauthorized(message) if !message.is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
