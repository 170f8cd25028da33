//! JSON format support.
//!
//! ```json
//! [
//!   { "kind": "struct", "name": "User",
//!     "members": [{ "name": "id", "type": "String" }] },
//!   { "kind": "function", "name": "fetchUser", "async": true, "throws": true,
//!     "params": [{ "label": "id", "type": "String" }], "returns": "User" }
//! ]
//! ```

use crate::syntax::Declaration;

use super::{Artifact, DeclarationFormat, InterchangeError};

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl DeclarationFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn read(&self, input: &[u8]) -> Result<Vec<Declaration>, InterchangeError> {
        serde_json::from_slice(input).map_err(|e| InterchangeError::json(e.to_string()))
    }

    fn write(&self, artifact: &Artifact) -> Result<Vec<u8>, InterchangeError> {
        serde_json::to_vec_pretty(artifact).map_err(|e| InterchangeError::json(e.to_string()))
    }
}
