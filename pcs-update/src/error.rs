//! Error types for pcs-update.

use std::fmt;
use std::io;

use thiserror::Error;

/// A command that ran but exited unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterError {
    pub command: String,
    pub exit_code: i32,
    pub stderr: String,
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            write!(f, "`{}` exited with code {}", self.command, self.exit_code)
        } else {
            write!(
                f,
                "`{}` exited with code {}: {}",
                self.command, self.exit_code, stderr
            )
        }
    }
}

impl std::error::Error for AdapterError {}

/// Fatal reconciliation errors. Skipped runs are not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Resource name is required")]
    InvalidName,

    #[error("Node name is required")]
    InvalidNodeName,

    #[error("Failed to read hostname: {0}")]
    Hostname(#[source] io::Error),

    #[error("Invalid container engine: {0}")]
    InvalidEngine(String),

    #[error("Resource status query failed: {0}")]
    StatusQueryFailed(AdapterError),

    #[error("Image digest query failed: {0}")]
    DigestQueryFailed(AdapterError),

    #[error("Resource restart failed: {0}")]
    RestartFailed(AdapterError),

    #[error("Unexpected output from `{command}`: {output:?}")]
    MalformedOutput { command: String, output: String },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Diagnostic text for the failure report: the tool's stderr when there
    /// is one, otherwise the error itself.
    pub fn message(&self) -> String {
        match self {
            Error::StatusQueryFailed(e) | Error::DigestQueryFailed(e) | Error::RestartFailed(e)
                if !e.stderr.trim().is_empty() =>
            {
                e.stderr.trim().to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter_error(stderr: &str) -> AdapterError {
        AdapterError {
            command: "pcs resource status web".to_string(),
            exit_code: 1,
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_message_prefers_stderr() {
        let err = Error::StatusQueryFailed(adapter_error("Error: resource 'web' not found\n"));
        assert_eq!(err.message(), "Error: resource 'web' not found");
    }

    #[test]
    fn test_message_falls_back_to_display() {
        let err = Error::RestartFailed(adapter_error("  "));
        assert_eq!(
            err.message(),
            "Resource restart failed: `pcs resource status web` exited with code 1"
        );

        let err = Error::InvalidEngine("containerd".to_string());
        assert_eq!(err.message(), "Invalid container engine: containerd");
    }
}
