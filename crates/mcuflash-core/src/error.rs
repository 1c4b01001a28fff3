//! Error types for device operations

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by device operations, organized by failure domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Transport Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Connection failed: {message}")]
    Connection { message: String },

    // ─────────────────────────────────────────────────────────────
    // Device Operation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Transfer failed: {message}")]
    Transfer { message: String },

    #[error("Compile failed for \"{file}\": {message}")]
    Compile { file: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Host-Side Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Device enumeration failed: {message}")]
    Enumeration { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn transfer(message: impl Into<String>) -> Self {
        Self::Transfer {
            message: message.into(),
        }
    }

    pub fn compile(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Compile {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn enumeration(message: impl Into<String>) -> Self {
        Self::Enumeration {
            message: message.into(),
        }
    }

    /// Check if retrying the whole operation can reasonably succeed.
    ///
    /// Connection and IO failures point at the host environment (wrong
    /// port, permissions, unplugged cable) and need operator action;
    /// everything else is a per-operation failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transfer { .. } | Error::Compile { .. } | Error::Enumeration { .. }
        )
    }
}
