//! Common trait for declaration interchange formats.

use crate::syntax::Declaration;

use super::{Artifact, InterchangeError};

/// Trait for declaration interchange formats.
///
/// Implementations read the declaration list produced by an external parser
/// and write the generated [`Artifact`] for the attachment step.
pub trait DeclarationFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Read a declaration list from bytes.
    fn read(&self, input: &[u8]) -> Result<Vec<Declaration>, InterchangeError>;

    /// Write an artifact to bytes.
    fn write(&self, artifact: &Artifact) -> Result<Vec<u8>, InterchangeError>;
}
