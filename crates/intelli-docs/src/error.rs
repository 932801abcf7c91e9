use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for stub generation operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for documentation extraction and stub generation.
///
/// Recoverable problems with individual signature lines never surface here;
/// they are routed to the [`ProblemSink`](crate::model::ProblemSink) instead.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to read, write or rename a pipeline artifact.
    #[error("failed to access '{path}': {error}")]
    Io {
        /// Path of the artifact that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// A method documents a global object as its return target.
    ///
    /// Globals are never aliased, so emitting the stub would bind the same
    /// name twice. The whole run stops.
    #[error("global '{target}' cannot be the return value of a function: `{line}`")]
    GlobalReturnTarget {
        /// Offending signature line, verbatim.
        line: String,
        /// Global identifier found on the left of `=`.
        target: String,
    },

    /// Serializing an inspection artifact failed.
    #[error("failed to serialize {what}: {error}")]
    Serialize {
        /// Name of the artifact being serialized.
        what: &'static str,
        /// Underlying serde error.
        #[source]
        error: serde_json::Error,
    },

    /// Generic error variant.
    #[error("{message}")]
    Other {
        /// Human-readable error message.
        message: String,
    },
}

impl DocsError {
    /// Helper to attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_return_target_names_the_line() {
        let err = DocsError::GlobalReturnTarget {
            line: "qm = la.newVec()".to_string(),
            target: "qm".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("qm = la.newVec()"));
        assert!(msg.contains("global 'qm'"));
    }

    #[test]
    fn io_error_mentions_path() {
        let err = DocsError::io(
            "intelli_tail.js",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("intelli_tail.js"));
    }
}
