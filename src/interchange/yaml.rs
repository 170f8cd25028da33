//! YAML format support.
//!
//! Same structure as the JSON format, in YAML syntax:
//!
//! ```yaml
//! - kind: enum
//!   name: Status
//!   cases:
//!     - name: active
//!       raw_value: '"active"'
//! ```

use crate::syntax::Declaration;

use super::{Artifact, DeclarationFormat, InterchangeError};

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl DeclarationFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn read(&self, input: &[u8]) -> Result<Vec<Declaration>, InterchangeError> {
        serde_yaml::from_slice(input).map_err(|e| InterchangeError::yaml(e.to_string()))
    }

    fn write(&self, artifact: &Artifact) -> Result<Vec<u8>, InterchangeError> {
        serde_yaml::to_string(artifact)
            .map(String::into_bytes)
            .map_err(|e| InterchangeError::yaml(e.to_string()))
    }
}
