//! Error types for the Hypernet library.
//!
//! All errors are represented by the [`HypernetError`] enum. Construction of a
//! [`WordNet`](crate::wordnet::WordNet) or a [`Digraph`](crate::graph::Digraph)
//! fails with a parse, graph or I/O error; queries fail with
//! [`HypernetError::InvalidArgument`]. Two concepts without a common ancestor
//! are not an error: queries report that case as `None`.
//!
//! # Examples
//!
//! ```
//! use hypernet::error::{HypernetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HypernetError::invalid_argument("empty source set"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Hypernet operations.
#[derive(Error, Debug)]
pub enum HypernetError {
    /// I/O errors (missing or unreadable relation files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed relation record or digraph file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Structural graph errors (out-of-range endpoint, cyclic hierarchy)
    #[error("Graph error: {0}")]
    Graph(String),

    /// Invalid query arguments (empty source set, unknown term, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with HypernetError.
pub type Result<T> = std::result::Result<T, HypernetError>;

impl HypernetError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        HypernetError::Parse(msg.into())
    }

    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        HypernetError::Graph(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HypernetError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        HypernetError::InvalidArgument(format!("Not found: {}", msg.into()))
    }

    /// Whether this error aborts construction rather than a single query.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            HypernetError::Io(_)
                | HypernetError::Parse(_)
                | HypernetError::Graph(_)
                | HypernetError::Json(_)
        )
    }
}
