//! Unified error handling for Appgen Core.
//!
//! Every failure the scaffolder can hit is a filesystem failure; the
//! `Internal` variant is kept for adapter bugs (poisoned locks and similar).

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Appgen Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppgenError {
    /// A directory could not be created or a file could not be written.
    #[error("Failed to {operation} at {path}: {reason}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl AppgenError {
    /// Build a filesystem error from an I/O failure.
    pub fn filesystem(
        path: impl Into<PathBuf>,
        operation: &'static str,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::Filesystem {
            path: path.into(),
            operation,
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Pick another base directory with --output-dir".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in appgen".into(),
                "Re-run with -vv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Path involved in the failure, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Filesystem { path, .. } => Some(path),
            Self::Internal { .. } => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type AppgenResult<T> = Result<T, AppgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn filesystem_error_message_names_operation_and_path() {
        let err = AppgenError::filesystem(
            "src/apps/blink/blink.h",
            "write file",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("write file"));
        assert!(msg.contains("src/apps/blink/blink.h"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn categories() {
        let fs = AppgenError::filesystem("x", "create directory", "nope");
        assert_eq!(fs.category(), ErrorCategory::Filesystem);
        assert!(fs.path().is_some());

        let internal = AppgenError::Internal {
            message: "lock poisoned".into(),
        };
        assert_eq!(internal.category(), ErrorCategory::Internal);
        assert!(internal.path().is_none());
    }

    #[test]
    fn suggestions_are_never_empty() {
        let fs = AppgenError::filesystem("x", "write file", "disk full");
        assert!(fs.suggestions().iter().any(|s| s.contains("permissions")));
        let internal = AppgenError::Internal {
            message: "x".into(),
        };
        assert!(!internal.suggestions().is_empty());
    }

    #[test]
    fn internal_suggestions_point_at_verbose_log() {
        let internal = AppgenError::Internal {
            message: "x".into(),
        };
        let suggestions = internal.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("-vv")));
        assert!(suggestions.iter().all(|s| !s.contains("http")));
    }
}
