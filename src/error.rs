//! Error types for the Sentiscope library.
//!
//! All errors are represented by the [`SentiscopeError`] enum. Each variant maps
//! onto one failure class of the training pipeline:
//!
//! - missing corpus directories surface as [`SentiscopeError::NotFound`] and are fatal
//! - unreadable review files surface as [`SentiscopeError::Parse`]; the corpus loader
//!   skips them instead of aborting
//! - a classifier that cannot be fitted surfaces as [`SentiscopeError::Convergence`];
//!   the model selector records it as a failed trial
//! - text/label count mismatches surface as [`SentiscopeError::Alignment`] and are
//!   always fatal
//!
//! # Examples
//!
//! ```
//! use sentiscope::error::{Result, SentiscopeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiscopeError::invalid_argument("k_folds must be at least 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentiscope operations.
#[derive(Error, Debug)]
pub enum SentiscopeError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required path (corpus root, split or class directory, model file) is missing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A review file could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors (tokenization, vocabulary building, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A classifier failed to fit within numerical tolerance.
    #[error("Convergence error: {0}")]
    Convergence(String),

    /// Every trial of a grid search failed.
    #[error("No viable configuration: {0}")]
    NoViableConfiguration(String),

    /// Texts and labels are not index-aligned.
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Model artifact errors (bad header, checksum mismatch, etc.)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Worker pool construction errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure with attached context, rendered with its whole cause chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentiscopeError.
pub type Result<T> = std::result::Result<T, SentiscopeError>;

impl SentiscopeError {
    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::NotFound(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::Analysis(msg.into())
    }

    /// Create a new convergence error.
    pub fn convergence<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::Convergence(msg.into())
    }

    /// Create a new no viable configuration error.
    pub fn no_viable_configuration<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::NoViableConfiguration(msg.into())
    }

    /// Create a new alignment error.
    pub fn alignment<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::Alignment(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::InvalidConfig(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::Storage(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::Serialization(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        SentiscopeError::ThreadPool(msg.into())
    }

    /// Whether this error should only fail the current grid-search trial.
    pub fn is_trial_local(&self) -> bool {
        matches!(
            self,
            SentiscopeError::Convergence(_)
                | SentiscopeError::InvalidArgument(_)
                | SentiscopeError::Analysis(_)
        )
    }
}

impl From<bincode::Error> for SentiscopeError {
    fn from(err: bincode::Error) -> Self {
        SentiscopeError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SentiscopeError::not_found("/data/aclImdb/train");
        assert_eq!(error.to_string(), "Not found: /data/aclImdb/train");

        let error = SentiscopeError::alignment("3 texts, 2 labels");
        assert_eq!(error.to_string(), "Alignment error: 3 texts, 2 labels");

        let error = SentiscopeError::analysis("empty vocabulary");
        assert_eq!(error.to_string(), "Analysis error: empty vocabulary");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SentiscopeError::from(io_error);

        match error {
            SentiscopeError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_trial_local_errors() {
        assert!(SentiscopeError::convergence("nan loss").is_trial_local());
        assert!(SentiscopeError::invalid_argument("C must be positive").is_trial_local());
        assert!(!SentiscopeError::alignment("mismatch").is_trial_local());
        assert!(!SentiscopeError::not_found("missing").is_trial_local());
    }
}
