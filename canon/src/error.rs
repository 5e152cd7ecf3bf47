//! Error type shared by every fallible engine operation.

use thiserror::Error;

/// Errors reported to callers of the engine.
///
/// All of them are input contract violations: the caller handed the engine
/// something it cannot accept. Rendering a completed graph never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A literal was supplied where a triple subject was expected.
    #[error("triple subject must be a URI reference or blank node, found {0}")]
    InvalidSubject(String),
    /// Something other than a URI reference was supplied as a predicate.
    #[error("triple predicate must be a URI reference, found {0}")]
    InvalidPredicate(String),
    /// A blank node label that cannot be written as `_:label`.
    #[error("invalid blank node label `{0}`")]
    InvalidBlankLabel(String),
    /// A prefix declaration that cannot be written as a Turtle directive.
    #[error("invalid prefix declaration `{prefix}`: {reason}")]
    InvalidPrefix {
        /// The offending prefix.
        prefix: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// A base URI that is not absolute.
    #[error("base URI must be absolute: {0}")]
    InvalidBase(String),
    /// A sink call made outside the `start` / `end` window.
    #[error("sink lifecycle violation: {0}")]
    Lifecycle(&'static str),
    /// Rejected configuration value.
    #[error("config error: {0}")]
    Config(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, CanonError>;
