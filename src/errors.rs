use thiserror::Error;

/// Errors surfaced while turning a scope declaration into runtime options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// A namespace failed DNS-1123 label validation.
    #[error("invalid namespace {name:?}: {reason}")]
    InvalidNamespace { name: String, reason: String },

    /// Scope resolution failed for any other reason.
    #[error("scope resolution error: {0}")]
    Resolution(String),
}

pub type Result<T> = std::result::Result<T, ScopeError>;
