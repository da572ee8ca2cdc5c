//! Error types for the Cine client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Cine client.
///
/// Variants follow the three user-facing failure classes (local validation,
/// transport, server-reported) plus the ambient failures of storage and
/// configuration.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CineError {
    /// Input rejected locally before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation needs a logged-in user and there is none
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// The request never produced a usable HTTP response
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The server answered with a non-2xx status or `success: false`
    #[error("Server error ({}): {}", display_status(.status), .message.as_deref().unwrap_or("no message"))]
    Server {
        status: Option<u16>,
        message: Option<String>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CineError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Server error for an HTTP status
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server {
            status: Some(status),
            message,
        }
    }

    /// Creates a Server error for a `success: false` body
    pub fn rejected(message: Option<String>) -> Self {
        Self::Server {
            status: None,
            message,
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a local validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error was raised because no session is active
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if the server rejected the request
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns true when the error happened locally, before any request left the client.
    pub fn is_local(&self) -> bool {
        self.is_validation() || self.is_unauthenticated()
    }

    /// Picks the text to show the user for this error.
    ///
    /// - Local failures carry their own message.
    /// - Transport failures map to the connectivity notice.
    /// - Server failures use the server-provided message, else `fallback`.
    /// - Anything else uses `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) | Self::Unauthenticated(message) => message.clone(),
            Self::Transport { .. } => crate::text::CONNECTION_FAILED.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CineError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CineError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

fn display_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "rejected".to_string(),
    }
}

/// A type alias for `Result<T, CineError>`.
pub type Result<T> = std::result::Result<T, CineError>;
