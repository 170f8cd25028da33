//! Error types for generation requests.

use thiserror::Error;

use crate::base::Name;
use crate::syntax::DeclKind;

/// Errors raised when a generation request targets the wrong declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The declaration kind does not support the requested output.
    #[error("Invalid declaration kind: `{name}` is a {found}, expected {expected}")]
    InvalidDeclarationKind {
        name: Name,
        found: DeclKind,
        expected: &'static str,
    },
}

impl GenerateError {
    /// Create an invalid declaration kind error.
    pub fn invalid_kind(name: impl Into<Name>, found: DeclKind, expected: &'static str) -> Self {
        Self::InvalidDeclarationKind {
            name: name.into(),
            found,
            expected,
        }
    }
}

/// Result alias for generation requests.
pub type Result<T> = std::result::Result<T, GenerateError>;
